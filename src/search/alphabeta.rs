use super::{traverse, Decision, Fold, Node, Policy, State};
use crate::Result;

/// Bounds of the values the maximizer (`alpha`) and the minimizers (`beta`)
/// can already guarantee on the path from the root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub alpha: f64,
    pub beta: f64,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBeta;

#[derive(Debug, Clone, Copy)]
pub struct AlphaBetaNode {
    maximize: bool,
    best: f64,
    window: Window,
}

impl Node for AlphaBetaNode {
    type Window = Window;

    fn window(&self) -> Window {
        self.window
    }

    fn fold(&mut self, value: f64) -> Fold {
        let improved;
        if self.maximize {
            improved = value > self.best;
            self.window.alpha = self.window.alpha.max(value);
        } else {
            improved = value < self.best;
            self.window.beta = self.window.beta.min(value);
        }
        if improved {
            self.best = value;
        }
        Fold {
            improved,
            // Equal bounds do not prune.
            prune: self.window.alpha > self.window.beta,
        }
    }

    fn value(&self) -> f64 {
        self.best
    }
}

impl Policy for AlphaBeta {
    type Window = Window;
    type Node = AlphaBetaNode;

    fn root(&self) -> Window {
        Window::default()
    }

    fn node(&self, agent: usize, window: Window) -> AlphaBetaNode {
        let maximize = agent == 0;
        AlphaBetaNode {
            maximize,
            best: if maximize {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            },
            window,
        }
    }
}

/// Alpha-Beta tree search.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
/// - Assumes the maximizing agent has id 0
/// - Returns the same action and value as [`super::minimax`]
pub fn alphabeta<S, F>(state: &S, depth: usize, eval: F) -> Result<Decision<S::Action>>
where
    S: State,
    F: FnMut(&S) -> f64,
{
    traverse(state, depth, &AlphaBeta, eval)
}

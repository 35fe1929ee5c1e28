use super::{traverse, Decision, Fold, Node, Policy, State};
use crate::Result;

/// The controlled agent maximizes, the adversaries choose uniformly at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct Expectimax;

#[derive(Debug, Clone, Copy)]
pub enum ExpectimaxNode {
    Max { best: f64 },
    Chance { total: f64, count: usize },
}

impl Node for ExpectimaxNode {
    type Window = ();

    fn window(&self) {}

    fn fold(&mut self, value: f64) -> Fold {
        match self {
            ExpectimaxNode::Max { best } => {
                let improved = value > *best;
                if improved {
                    *best = value;
                }
                Fold {
                    improved,
                    prune: false,
                }
            }
            ExpectimaxNode::Chance { total, count } => {
                *total += value;
                *count += 1;
                // The action of a chance node is never consumed,
                // only keep the first one as a placeholder.
                Fold {
                    improved: *count == 1,
                    prune: false,
                }
            }
        }
    }

    fn value(&self) -> f64 {
        match *self {
            ExpectimaxNode::Max { best } => best,
            ExpectimaxNode::Chance { total, count } => {
                debug_assert!(count > 0);
                total / count as f64
            }
        }
    }
}

impl Policy for Expectimax {
    type Window = ();
    type Node = ExpectimaxNode;

    fn root(&self) {}

    fn node(&self, agent: usize, _: ()) -> ExpectimaxNode {
        if agent == 0 {
            ExpectimaxNode::Max {
                best: f64::NEG_INFINITY,
            }
        } else {
            ExpectimaxNode::Chance {
                total: 0.0,
                count: 0,
            }
        }
    }
}

/// Expectimax tree search.
///
/// The adversaries are modeled as choosing uniformly among their legal
/// actions, their nodes back up the mean of all children.
pub fn expectimax<S, F>(state: &S, depth: usize, eval: F) -> Result<Decision<S::Action>>
where
    S: State,
    F: FnMut(&S) -> f64,
{
    traverse(state, depth, &Expectimax, eval)
}

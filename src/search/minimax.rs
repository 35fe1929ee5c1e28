use super::{traverse, Decision, Fold, Node, Policy, State};
use crate::Result;

/// The controlled agent (0) maximizes, all other agents minimize.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

#[derive(Debug, Clone, Copy)]
pub struct MinimaxNode {
    maximize: bool,
    best: f64,
}

impl Node for MinimaxNode {
    type Window = ();

    fn window(&self) {}

    fn fold(&mut self, value: f64) -> Fold {
        let improved = if self.maximize {
            value > self.best
        } else {
            value < self.best
        };
        if improved {
            self.best = value;
        }
        Fold {
            improved,
            prune: false,
        }
    }

    fn value(&self) -> f64 {
        self.best
    }
}

impl Policy for Minimax {
    type Window = ();
    type Node = MinimaxNode;

    fn root(&self) {}

    fn node(&self, agent: usize, _: ()) -> MinimaxNode {
        let maximize = agent == 0;
        MinimaxNode {
            maximize,
            best: if maximize {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            },
        }
    }
}

/// Minimax tree search with multiple minimizing agents.
///
/// Ties are resolved in favor of the first action in enumeration order.
pub fn minimax<S, F>(state: &S, depth: usize, eval: F) -> Result<Decision<S::Action>>
where
    S: State,
    F: FnMut(&S) -> f64,
{
    traverse(state, depth, &Minimax, eval)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::search::testing::Table;

    #[test]
    fn min_of_max() {
        let table = Table::two_level(2, &[&[3.0, 12.0, 8.0], &[2.0, 4.0, 6.0], &[14.0, 5.0, 2.0]]);
        let decision = minimax(&table, 1, Table::score).unwrap();
        assert_eq!(decision.action, Some('A'));
        assert_eq!(decision.value, 3.0);
        assert_eq!(decision.stats.nodes, 13);
        assert_eq!(decision.stats.leaves, 9);
    }

    #[test]
    fn ties_keep_first_action() {
        // Both actions back up to 5 after the adversary's best reply.
        let table = Table::two_level(2, &[&[5.0, 7.0], &[9.0, 5.0]]);
        for _ in 0..10 {
            let decision = minimax(&table, 1, Table::score).unwrap();
            assert_eq!(decision.action, Some('A'));
            assert_eq!(decision.value, 5.0);
        }
    }

    #[test]
    fn single_agent_maximizes() {
        // With only the controlled agent every level is a max layer.
        let table = Table::two_level(1, &[&[1.0, 2.0], &[0.0, 4.0]]);
        let decision = minimax(&table, 2, Table::score).unwrap();
        assert_eq!(decision.action, Some('B'));
        assert_eq!(decision.value, 4.0);

        let decision = minimax(&table, 1, Table::score).unwrap();
        assert_eq!(decision.action, Some('A'));
        assert_eq!(decision.value, 0.0);
    }
}

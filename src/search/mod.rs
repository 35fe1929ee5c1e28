mod alphabeta;
pub use alphabeta::*;
mod expectimax;
pub use expectimax::*;
mod minimax;
pub use minimax::*;

use std::fmt::Debug;

use crate::env::Vec2D;
use crate::{Error, Result};

/// Bonus for a won game.
pub const WIN: f64 = 1000.0;
/// Value of a lost game. Lower than any reachable score.
pub const LOSS: f64 = -1_000_000.0;

/// The environment as seen by the tree search.
///
/// States are never mutated by the search.
/// Every transition creates a new state with [`State::successor`].
pub trait State: Sized {
    type Action: Copy + PartialEq + Debug;

    /// Legal actions of `agent` in enumeration order.
    /// Only terminal states may return no actions.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;
    /// The state after `agent` executed `action`.
    fn successor(&self, agent: usize, action: Self::Action) -> Self;
    fn is_win(&self) -> bool;
    fn is_lose(&self) -> bool;
    /// Number of agents including the controlled agent (0).
    fn num_agents(&self) -> usize;
    fn score(&self) -> f64;

    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// Position and vulnerability countdown of an adversary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adversary {
    pub position: Vec2D,
    /// Remaining moves the adversary can be caught.
    /// Not used by the built-in evaluations, available to custom ones.
    pub scared: u16,
}

/// Board features used by the evaluation functions.
pub trait Features: State {
    /// Position of the controlled agent.
    fn agent_position(&self) -> Vec2D;
    fn food(&self) -> Vec<Vec2D>;
    fn num_food(&self) -> usize;
    /// Positions of the remaining power items.
    fn capsules(&self) -> Vec<Vec2D>;
    fn adversaries(&self) -> Vec<Adversary>;
}

/// Outcome of folding a child value into its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fold {
    /// The child is the new best choice of this node.
    pub improved: bool,
    /// The remaining siblings can be skipped.
    pub prune: bool,
}

/// Combines the backed-up values of the children of a single node.
pub trait Node {
    /// Bounds handed down to the children.
    type Window: Copy;

    fn window(&self) -> Self::Window;
    fn fold(&mut self, value: f64) -> Fold;
    fn value(&self) -> f64;
}

/// The per-agent combine rule of a search strategy.
pub trait Policy {
    type Window: Copy;
    type Node: Node<Window = Self::Window>;

    fn root(&self) -> Self::Window;
    fn node(&self, agent: usize, window: Self::Window) -> Self::Node;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of visited states including the root.
    pub nodes: usize,
    /// Number of evaluated states.
    pub leaves: usize,
}

/// Result of a tree search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision<A> {
    /// Best action of the controlled agent.
    /// `None` if the root was evaluated without expansion.
    pub action: Option<A>,
    pub value: f64,
    pub stats: Stats,
}

/// Depth-limited traversal shared by all strategies.
///
/// Agents move in ascending order starting with the controlled agent 0.
/// The depth counts full rounds and is decremented after the last agent moved.
pub fn traverse<S, P, F>(
    state: &S,
    depth: usize,
    policy: &P,
    mut eval: F,
) -> Result<Decision<S::Action>>
where
    S: State,
    P: Policy,
    F: FnMut(&S) -> f64,
{
    let mut stats = Stats::default();
    let (action, value) = traverse_rec(
        state,
        depth,
        0,
        policy.root(),
        policy,
        &mut eval,
        &mut stats,
    )?;
    Ok(Decision {
        action,
        value,
        stats,
    })
}

fn traverse_rec<S, P, F>(
    state: &S,
    depth: usize,
    agent: usize,
    window: P::Window,
    policy: &P,
    eval: &mut F,
    stats: &mut Stats,
) -> Result<(Option<S::Action>, f64)>
where
    S: State,
    P: Policy,
    F: FnMut(&S) -> f64,
{
    stats.nodes += 1;

    if depth == 0 || state.is_terminal() {
        stats.leaves += 1;
        return Ok((None, eval(state)));
    }

    let actions = state.legal_actions(agent);
    if actions.is_empty() {
        return Err(Error::NoLegalActions { agent });
    }

    let num_agents = state.num_agents();
    let next_agent = (agent + 1) % num_agents;
    let next_depth = if agent == num_agents - 1 {
        depth - 1
    } else {
        depth
    };

    let mut node = policy.node(agent, window);
    let mut best = None;
    for action in actions {
        let successor = state.successor(agent, action);
        let (_, value) = traverse_rec(
            &successor,
            next_depth,
            next_agent,
            node.window(),
            policy,
            eval,
            stats,
        )?;

        let fold = node.fold(value);
        if fold.improved {
            best = Some(action);
        }
        if fold.prune {
            break;
        }
    }
    Ok((best, node.value()))
}

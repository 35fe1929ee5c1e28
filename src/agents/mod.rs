use std::fmt;
use std::str::FromStr;

use rand::rngs::SmallRng;
use rand::SeedableRng;

mod heuristic;
pub use heuristic::*;
mod random;
pub use random::*;
mod reflex;
pub use reflex::*;
mod search;
pub use search::*;

use crate::search::Features;
use crate::Result;

/// Agents controlling agent 0, configured by JSON on the command line.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Agent {
    Reflex(ReflexAgent),
    Minimax(SearchConfig),
    AlphaBeta(SearchConfig),
    Expectimax(SearchConfig),
    Random(RandomAgent),
}

impl Default for Agent {
    fn default() -> Self {
        Self::AlphaBeta(SearchConfig::default())
    }
}

impl Agent {
    /// Returns one of the legal actions of agent 0.
    pub fn get_action<S: Features>(&self, state: &S) -> Result<S::Action> {
        match self {
            Agent::Reflex(agent) => agent.get_action(state),
            Agent::Minimax(config) => config.get_action(Strategy::Minimax, state),
            Agent::AlphaBeta(config) => config.get_action(Strategy::AlphaBeta, state),
            Agent::Expectimax(config) => config.get_action(Strategy::Expectimax, state),
            Agent::Random(agent) => {
                let mut rng = SmallRng::from_entropy();
                agent.get_action(state, 0, &mut rng)
            }
        }
    }
}

impl FromStr for Agent {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(self).unwrap_or_default())
    }
}

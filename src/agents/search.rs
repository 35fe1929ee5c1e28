use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::debug;

use super::Evaluation;
use crate::search::{alphabeta, expectimax, minimax, Decision, Features};
use crate::{Error, Result};

/// Configuration of the tree search agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Evaluation of the leafs and the terminal states.
    pub evaluation: Evaluation,
    /// Number of full rounds, where every agent moves once.
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            evaluation: Evaluation::Score,
            depth: 2,
        }
    }
}

impl SearchConfig {
    /// Builds the configuration from the command line style names.
    pub fn parse(evaluation: &str, depth: &str) -> Result<SearchConfig> {
        let evaluation = evaluation.parse()?;
        let depth = depth
            .trim()
            .parse()
            .map_err(|_| Error::InvalidDepth(depth.into()))?;
        Ok(SearchConfig { evaluation, depth })
    }

    /// Chooses the action of the controlled agent.
    ///
    /// If the search does not return an action (depth 0) the first legal
    /// action is chosen.
    pub fn get_action<S: Features>(&self, strategy: Strategy, state: &S) -> Result<S::Action> {
        let decision = strategy.search(self, state)?;
        decision
            .action
            .or_else(|| state.legal_actions(0).first().copied())
            .ok_or(Error::NoAction)
    }
}

/// The combine rule of the adversary layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Strategy {
    /// Adversaries minimize.
    Minimax,
    /// Adversaries minimize, provably irrelevant subtrees are skipped.
    AlphaBeta,
    /// Adversaries choose uniformly at random.
    Expectimax,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "minimax"),
            Strategy::AlphaBeta => write!(f, "alphabeta"),
            Strategy::Expectimax => write!(f, "expectimax"),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "alphabeta" => Ok(Strategy::AlphaBeta),
            "expectimax" => Ok(Strategy::Expectimax),
            _ => Err(Error::UnknownStrategy(s.into())),
        }
    }
}

impl Strategy {
    /// Performs the tree search and logs its statistics.
    pub fn search<S: Features>(
        self,
        config: &SearchConfig,
        state: &S,
    ) -> Result<Decision<S::Action>> {
        let start = Instant::now();

        let eval = config.evaluation.function::<S>();
        let decision = match self {
            Strategy::Minimax => minimax(state, config.depth, eval)?,
            Strategy::AlphaBeta => alphabeta(state, config.depth, eval)?,
            Strategy::Expectimax => expectimax(state, config.depth, eval)?,
        };

        debug!(
            ">>> {} {} {:?}ms {:?} {} nodes={} leaves={}",
            self,
            config.depth,
            start.elapsed().as_millis(),
            decision.action,
            decision.value,
            decision.stats.nodes,
            decision.stats.leaves
        );
        Ok(decision)
    }
}

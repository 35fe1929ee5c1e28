use thiserror::Error;

/// Errors of the search agents and their configuration.
///
/// None of them is recoverable: they point to a misconfigured agent or an
/// environment whose terminal predicates disagree with its action enumeration.
#[derive(Error, Debug)]
pub enum Error {
    #[error("agent {agent} has no legal actions in a non-terminal state")]
    NoLegalActions { agent: usize },

    #[error("no legal action for the controlled agent")]
    NoAction,

    #[error("unknown evaluation function: {0}")]
    UnknownEvaluation(String),

    #[error("unknown search strategy: {0}")]
    UnknownStrategy(String),

    #[error("invalid search depth: {0}")]
    InvalidDepth(String),

    #[error("invalid layout")]
    Layout,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

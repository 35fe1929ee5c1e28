use std::str::FromStr;

use crate::search::{Features, State, LOSS, WIN};
use crate::Error;

/// Weights of the lookahead heuristic, ordered by magnitude.
/// The food count dominates the distance terms by more than one order of magnitude.
const FOOD: f64 = 100.0;
const CAPSULE: f64 = 50.0;
const FOOD_DISTANCE: f64 = 5.0;
const ADVERSARY_PROXIMITY: f64 = 1.0;

/// Evaluation functions for the leafs of the tree search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Evaluation {
    /// The game score.
    #[default]
    #[serde(alias = "scoreEvaluationFunction")]
    Score,
    /// The game score with a one ply lookahead over weighted board features.
    #[serde(alias = "betterEvaluationFunction")]
    Better,
}

impl Evaluation {
    /// Resolves the evaluation function for the state type.
    pub fn function<S: Features>(self) -> fn(&S) -> f64 {
        match self {
            Evaluation::Score => score_evaluation::<S>,
            Evaluation::Better => better_evaluation::<S>,
        }
    }
}

impl FromStr for Evaluation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "score" | "scoreEvaluationFunction" => Ok(Evaluation::Score),
            "better" | "betterEvaluationFunction" => Ok(Evaluation::Better),
            _ => Err(Error::UnknownEvaluation(s.into())),
        }
    }
}

/// Returns the score of the state.
pub fn score_evaluation<S: State>(state: &S) -> f64 {
    state.score()
}

/// Score plus the expected board features after the next move of the
/// controlled agent.
///
/// Prefers in this order: winning, eating all food, eating the capsules,
/// moving towards food and finally approaching the adversaries.
/// Losing states are always rated [`LOSS`].
pub fn better_evaluation<S: Features>(state: &S) -> f64 {
    if state.is_lose() {
        return LOSS;
    }
    if state.is_win() {
        return state.score() + WIN;
    }

    let actions = state.legal_actions(0);
    if actions.is_empty() {
        return state.score() + features(state);
    }

    let mut expected = 0.0;
    for &action in &actions {
        let successor = state.successor(0, action);
        // Losing moves contribute nothing but still count
        if !successor.is_lose() {
            expected += features(&successor);
        }
    }
    state.score() + expected / actions.len() as f64
}

fn features<S: Features>(state: &S) -> f64 {
    let mut value = 0.0;
    if state.is_win() {
        value += WIN;
    }
    value += FOOD / (state.num_food() + 1) as f64;
    value += CAPSULE / (state.capsules().len() + 1) as f64;
    if let Some(d) = nearest_food(state).filter(|&d| d > 0.0) {
        value += FOOD_DISTANCE / d;
    }
    if let Some(d) = nearest_adversary(state) {
        value += ADVERSARY_PROXIMITY / (d + 1.0);
    }
    value
}

/// Euclidean distance from the controlled agent to the closest food.
pub fn nearest_food<S: Features>(state: &S) -> Option<f64> {
    let p = state.agent_position();
    state
        .food()
        .into_iter()
        .map(|f| p.euclidean(f))
        .min_by(f64::total_cmp)
}

/// Euclidean distance from the controlled agent to the closest adversary.
pub fn nearest_adversary<S: Features>(state: &S) -> Option<f64> {
    let p = state.agent_position();
    state
        .adversaries()
        .into_iter()
        .map(|a| p.euclidean(a.position))
        .min_by(f64::total_cmp)
}

use log::trace;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::heuristic::{nearest_adversary, nearest_food};
use crate::search::{Features, LOSS, WIN};
use crate::util::argmax_all;
use crate::{Error, Result};

const FOOD: f64 = 100.0;
const CAPSULE: f64 = 50.0;
const FOOD_DISTANCE: f64 = 10.0;
const ADVERSARY_DISTANCE: f64 = 0.1;

/// Rates every action by the state directly after it, without any search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReflexAgent;

impl ReflexAgent {
    /// Rates the successor after the controlled agent executed `action`.
    ///
    /// Unlike the search heuristic, adversaries close by lower the rating.
    pub fn evaluate<S: Features>(state: &S, action: S::Action) -> f64 {
        let successor = state.successor(0, action);
        if successor.is_lose() {
            return LOSS;
        }

        let mut value = successor.score();
        if successor.is_win() {
            value += WIN;
        }
        value += FOOD / (successor.num_food() + 1) as f64;
        // Capsules of the successor, so that eating one is rewarded
        value += CAPSULE / (successor.capsules().len() + 1) as f64;
        if let Some(d) = nearest_food(&successor).filter(|&d| d > 0.0) {
            value += FOOD_DISTANCE / d;
        }
        if let Some(d) = nearest_adversary(&successor) {
            value += ADVERSARY_DISTANCE * d;
        }
        value
    }

    pub fn get_action<S: Features>(&self, state: &S) -> Result<S::Action> {
        let mut rng = SmallRng::from_entropy();
        self.get_action_with(state, &mut rng)
    }

    /// Chooses the best rated action, ties are broken uniformly at random.
    pub fn get_action_with<S: Features, R: Rng>(
        &self,
        state: &S,
        rng: &mut R,
    ) -> Result<S::Action> {
        let actions = state.legal_actions(0);
        let scores: Vec<f64> = actions
            .iter()
            .map(|&action| Self::evaluate(state, action))
            .collect();
        trace!("reflex {:?} {:?}", actions, scores);

        argmax_all(&scores)
            .choose(rng)
            .map(|&i| actions[i])
            .ok_or(Error::NoAction)
    }
}

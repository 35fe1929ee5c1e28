use rand::seq::SliceRandom;
use rand::Rng;

use crate::search::State;
use crate::{Error, Result};

/// Chooses uniformly among the legal actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn get_action<S: State, R: Rng>(
        &self,
        state: &S,
        agent: usize,
        rng: &mut R,
    ) -> Result<S::Action> {
        match state.legal_actions(agent).choose(rng) {
            Some(&action) => Ok(action),
            None if agent == 0 => Err(Error::NoAction),
            None => Err(Error::NoLegalActions { agent }),
        }
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::env::Direction::*;
    use crate::game::Game;

    #[test]
    fn legal_actions_only() {
        let game = Game::parse(
            r#"
            %%%%%
            %P G%
            %%% %
            %%%%%"#,
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = Vec::new();
        for _ in 0..100 {
            let action = RandomAgent.get_action(&game, 1, &mut rng).unwrap();
            assert!(action == Down || action == Left);
            if !seen.contains(&action) {
                seen.push(action);
            }
        }
        assert_eq!(seen.len(), 2);

        let won = Game::parse("%%%%\n%P.%\n%%%%").unwrap().successor(0, Right);
        assert!(matches!(
            RandomAgent.get_action(&won, 0, &mut rng),
            Err(Error::NoAction)
        ));
        assert!(matches!(
            RandomAgent.get_action(&won, 1, &mut rng),
            Err(Error::NoLegalActions { agent: 1 })
        ));
    }
}

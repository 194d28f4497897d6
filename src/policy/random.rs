//! Random candidate policy

use super::{Policy, PolicyError};
use crate::core::Word;
use crate::game::GameState;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Uniformly samples one of the remaining candidates
///
/// Owns its RNG so runs are reproducible from a seed.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Create a policy with a deterministic RNG
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, state: &GameState) -> Result<Word, PolicyError> {
        let candidates: Vec<Word> = state.candidates().collect();
        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(PolicyError::EmptyCandidates)
    }
}

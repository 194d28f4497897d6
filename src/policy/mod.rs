//! Guess-selection policies
//!
//! Defines the [`Policy`] trait and concrete implementations. Policies see
//! only the public game state (history and candidates), never the answer.

mod greedy;
mod random;

pub use greedy::GreedyEliminationPolicy;
pub use random::RandomPolicy;

use crate::core::Word;
use crate::game::GameState;
use std::fmt;

/// Error selecting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyError {
    /// No answer word is consistent with the game history. The history is
    /// contradictory; the game cannot be finished.
    EmptyCandidates,
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidates => {
                write!(f, "no candidate word is consistent with the game history")
            }
        }
    }
}

impl std::error::Error for PolicyError {}

/// A strategy for choosing the next guess
///
/// `choose` takes `&mut self` because policies carry state: an RNG, or a memo
/// of past decisions.
pub trait Policy {
    /// Choose the next guess for an in-progress game
    ///
    /// # Errors
    /// Returns [`PolicyError::EmptyCandidates`] when no answer word fits the
    /// history.
    fn choose(&mut self, state: &GameState) -> Result<Word, PolicyError>;

    /// Drop accumulated state between independent runs
    fn reset(&mut self) {}
}

/// Enum wrapper for all policy types
///
/// Allows runtime selection while keeping static dispatch.
pub enum PolicyKind {
    Random(RandomPolicy),
    Greedy(GreedyEliminationPolicy),
}

impl PolicyKind {
    /// Create a policy from a name
    ///
    /// Supported names: "random", "greedy". Unrecognized names default to
    /// greedy. The seed only affects the random policy.
    #[must_use]
    pub fn from_name(name: &str, seed: u64) -> Self {
        match name {
            "random" => Self::Random(RandomPolicy::seeded(seed)),
            _ => Self::Greedy(GreedyEliminationPolicy::new()),
        }
    }
}

impl Policy for PolicyKind {
    fn choose(&mut self, state: &GameState) -> Result<Word, PolicyError> {
        match self {
            Self::Random(p) => p.choose(state),
            Self::Greedy(p) => p.choose(state),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Random(p) => p.reset(),
            Self::Greedy(p) => p.reset(),
        }
    }
}

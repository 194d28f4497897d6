//! Game simulation
//!
//! The dictionary, the per-game state machine, and the candidate filter.

mod dictionary;
mod state;

pub use dictionary::{Dictionary, DictionaryError};
pub use state::{DEFAULT_MAX_ATTEMPTS, GameError, GameState, Status};

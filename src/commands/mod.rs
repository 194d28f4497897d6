//! Command implementations

pub mod benchmark;
pub mod play;

pub use benchmark::{
    BenchmarkReport, GameOutcome, GameRecord, play_game, run_benchmark, write_transcript,
};
pub use play::run_play;

//! Core domain types
//!
//! Pure, dependency-light building blocks: validated words and the
//! duplicate-letter-correct matching algorithm. Nothing here does I/O.

mod matching;
mod word;

pub use matching::{Feedback, MatchCache, Matching, match_words, match_words_cached};
pub use word::{WORD_LEN, Word, WordError};

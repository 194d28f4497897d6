//! Game state and candidate filtering
//!
//! A [`GameState`] owns one game: the hidden answer, the attempt budget, and
//! the guess/feedback history. The dictionary is borrowed read-only so many
//! games can share it. Two invariants hold between calls:
//!
//! - `history.len() + attempts_left == max_attempts`
//! - status is `Win` iff the last feedback is all-Exact, `Lose` iff the
//!   budget is exhausted without a win, `InProgress` otherwise

use super::dictionary::Dictionary;
use crate::core::{Feedback, Word, match_words};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Standard Wordle attempt budget
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Win,
    Lose,
}

/// Error submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The word is in neither the allowed nor the answer list.
    /// The attempt counter is untouched.
    InvalidWord(Word),
    /// The game is already won or lost
    Finished,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(word) => write!(f, "{word} is not an allowed word"),
            Self::Finished => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

/// A single game of Wordle
#[derive(Debug, Clone)]
pub struct GameState<'d> {
    dictionary: &'d Dictionary,
    answer: Word,
    max_attempts: u32,
    attempts_left: u32,
    history: Vec<(Word, Feedback)>,
    status: Status,
}

impl<'d> GameState<'d> {
    /// Start a fresh game with a chosen answer
    #[must_use]
    pub fn new(dictionary: &'d Dictionary, answer: Word) -> Self {
        Self {
            dictionary,
            answer,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            attempts_left: DEFAULT_MAX_ATTEMPTS,
            history: Vec::new(),
            status: Status::InProgress,
        }
    }

    /// Start a fresh game with an answer drawn uniformly from the answer list
    ///
    /// # Panics
    /// Panics if the dictionary has no answers; `Dictionary` construction
    /// rejects empty answer lists, so this cannot happen for loaded
    /// dictionaries.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(dictionary: &'d Dictionary, rng: &mut R) -> Self {
        let answer = *dictionary
            .answers()
            .choose(rng)
            .expect("dictionary guarantees a non-empty answer list");
        Self::new(dictionary, answer)
    }

    /// Override the attempt budget (builder style)
    ///
    /// A budget of zero is clamped to one; a game must allow a guess.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.attempts_left = self.max_attempts;
        self
    }

    /// Reset to a fresh game with a chosen answer, keeping the budget
    pub fn reset_to(&mut self, answer: Word) {
        self.answer = answer;
        self.attempts_left = self.max_attempts;
        self.history.clear();
        self.status = Status::InProgress;
    }

    /// Reset to a fresh game with a random answer
    pub fn reset_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let answer = *self
            .dictionary
            .answers()
            .choose(rng)
            .expect("dictionary guarantees a non-empty answer list");
        self.reset_to(answer);
    }

    /// Submit a guess
    ///
    /// Scores the guess against the answer, appends it to the history,
    /// consumes one attempt, and recomputes the status.
    ///
    /// # Errors
    /// - [`GameError::Finished`] when the game is already won or lost
    /// - [`GameError::InvalidWord`] when the word is in neither word list;
    ///   checked before the attempt counter is touched, so invalid guesses
    ///   are free
    pub fn submit_guess(&mut self, word: Word) -> Result<Feedback, GameError> {
        if self.status != Status::InProgress {
            return Err(GameError::Finished);
        }
        if !self.dictionary.is_guessable(&word) {
            return Err(GameError::InvalidWord(word));
        }

        self.attempts_left -= 1;
        let feedback = match_words(&self.answer, &word);
        self.history.push((word, feedback));

        self.status = if feedback.is_win() {
            Status::Win
        } else if self.attempts_left == 0 {
            Status::Lose
        } else {
            Status::InProgress
        };

        Ok(feedback)
    }

    /// Independent copy for simulating hypothetical guesses
    ///
    /// Shares the dictionary borrow and the answer; deep-copies history,
    /// status, and the attempt counters.
    #[must_use]
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// Answer words consistent with every (guess, feedback) pair so far
    ///
    /// Lazy and restartable; order follows the answer list. Each pass
    /// re-scores every answer against the full history, so callers needing
    /// the set more than once per turn should materialize it.
    pub fn candidates(&self) -> impl Iterator<Item = Word> + '_ {
        self.dictionary.answers().iter().copied().filter(move |candidate| {
            self.history
                .iter()
                .all(|(guess, feedback)| match_words(candidate, guess) == *feedback)
        })
    }

    /// Number of remaining candidates
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates().count()
    }

    /// The hidden answer
    ///
    /// Policies must not look at this; it exists for the harness to reveal
    /// after a loss and for forks to share the same game.
    #[must_use]
    pub const fn answer(&self) -> Word {
        self.answer
    }

    /// The shared dictionary
    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Guesses and their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Attempts consumed so far
    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.max_attempts - self.attempts_left
    }
}

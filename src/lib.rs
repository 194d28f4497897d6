//! Wordle Gym
//!
//! A Wordle game simulator and evaluation harness for automated guessing
//! policies. The core is the duplicate-letter-correct matching algorithm,
//! the game state machine, and a lazy candidate filter; policies plug in on
//! top and a parallel benchmark drives them across every possible answer.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_gym::core::{Word, match_words};
//! use wordle_gym::game::{Dictionary, GameState};
//!
//! let answer = Word::new("abbey").unwrap();
//! let guess = Word::new("kebab").unwrap();
//!
//! // Score a guess: + exact, ? present elsewhere, _ absent
//! assert_eq!(match_words(&answer, &guess).render(), "_?+??");
//!
//! // Play a game
//! let dictionary = Dictionary::new(vec![guess], vec![answer]).unwrap();
//! let mut game = GameState::new(&dictionary, answer);
//! let feedback = game.submit_guess(answer).unwrap();
//! assert!(feedback.is_win());
//! ```

// Core domain types
pub mod core;

// Dictionary and game state
pub mod game;

// Guess-selection policies
pub mod policy;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Terminal play loop
//!
//! Plain-text interactive game: one guess per line, `/cheat` lists the words
//! still consistent with the history, `/quit` gives up. Invalid input never
//! costs an attempt.

use crate::core::Word;
use crate::game::{Dictionary, GameError, GameState, Status};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};

/// Run one interactive game against a random answer
///
/// # Errors
/// Returns an I/O error if stdin or stdout fails.
pub fn run_play(dictionary: &Dictionary, seed: u64) -> io::Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::random(dictionary, &mut rng);

    println!(
        "Guess the hidden 5-letter word. You have {} attempts.",
        state.max_attempts()
    );
    println!("Commands: /cheat lists remaining candidates, /quit gives up.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while state.status() == Status::InProgress {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // EOF: treat like giving up
            println!("\nThe answer was {}.", state.answer());
            return Ok(());
        };
        let input = line?.trim().to_string();

        match input.as_str() {
            "" => continue,
            "/cheat" => {
                print_candidates(&state);
                continue;
            }
            "/quit" => {
                println!("The answer was {}.", state.answer());
                return Ok(());
            }
            _ => {}
        }

        let word = match Word::new(&input) {
            Ok(word) => word,
            Err(err) => {
                println!("{err}, try again.\n");
                continue;
            }
        };

        match state.submit_guess(word) {
            Ok(_) => {
                print_history(&state);
                println!();
            }
            Err(GameError::InvalidWord(_)) => println!("Not a word, try again.\n"),
            Err(GameError::Finished) => break,
        }
    }

    match state.status() {
        Status::Win => println!("{}", "You won!".green().bold()),
        Status::Lose => println!(
            "{} The answer was {}.",
            "You lost!".red().bold(),
            state.answer()
        ),
        Status::InProgress => {}
    }

    Ok(())
}

/// Print every guess so far with its rendered feedback
fn print_history(state: &GameState) {
    for (guess, feedback) in state.history() {
        println!("{guess} {feedback}");
    }
}

/// Print the words still consistent with the history
fn print_candidates(state: &GameState) {
    let candidates: Vec<String> = state.candidates().map(|w| w.to_string()).collect();
    println!("{} candidates: {}\n", candidates.len(), candidates.join(" "));
}

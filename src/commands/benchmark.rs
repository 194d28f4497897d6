//! Full-dictionary benchmark harness
//!
//! Runs a policy to completion against every answer word. Games are fully
//! independent, so they run in parallel; each rayon worker owns a private
//! policy instance (its own memo and RNG), and the only shared state is the
//! read-only dictionary and the progress bar.

use crate::core::{Feedback, Word};
use crate::game::{Dictionary, GameState, Status};
use crate::policy::Policy;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// How a single benchmark game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Lose,
    /// The policy hit an empty candidate set; the game could not finish
    Failed,
}

/// Transcript of one benchmark game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub answer: Word,
    pub guesses: Vec<(Word, Feedback)>,
    pub outcome: GameOutcome,
}

/// Aggregated results of a benchmark run
#[derive(Debug)]
pub struct BenchmarkReport {
    /// Completed games (wins + losses); failures are excluded
    pub games_played: usize,
    pub wins: usize,
    pub losses: usize,
    /// Games the policy could not finish (contradictory history)
    pub failures: usize,
    /// Guesses across completed games, counting all guesses of lost games
    pub total_guesses: usize,
    /// Wins by number of guesses used
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
}

impl BenchmarkReport {
    /// Fraction of completed games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64
        }
    }

    /// Mean guesses per completed game
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games_played as f64
        }
    }

    /// Games per wall-clock second, including failures
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        let total = self.games_played + self.failures;
        total as f64 / self.duration.as_secs_f64()
    }
}

/// Play one game to completion
///
/// An `EmptyCandidates` policy error ends the game as [`GameOutcome::Failed`]
/// rather than propagating; the benchmark records it and moves on.
pub fn play_game<P: Policy>(dictionary: &Dictionary, policy: &mut P, answer: Word) -> GameRecord {
    let mut state = GameState::new(dictionary, answer);

    while state.status() == Status::InProgress {
        let Ok(guess) = policy.choose(&state) else {
            return GameRecord {
                answer,
                guesses: state.history().to_vec(),
                outcome: GameOutcome::Failed,
            };
        };
        if state.submit_guess(guess).is_err() {
            // A policy produced a non-word; treat like a contradictory game
            return GameRecord {
                answer,
                guesses: state.history().to_vec(),
                outcome: GameOutcome::Failed,
            };
        }
    }

    let outcome = match state.status() {
        Status::Win => GameOutcome::Win,
        _ => GameOutcome::Lose,
    };
    GameRecord {
        answer,
        guesses: state.history().to_vec(),
        outcome,
    }
}

/// Run a policy against every answer word (or the first `limit`)
///
/// `make_policy` builds one policy per rayon worker, so memos are private and
/// no lock sits on the hot path. Returns the aggregate report plus the
/// per-game records in answer-list order.
pub fn run_benchmark<P, F>(
    dictionary: &Dictionary,
    make_policy: F,
    limit: Option<usize>,
) -> (BenchmarkReport, Vec<GameRecord>)
where
    P: Policy + Send,
    F: Fn() -> P + Send + Sync,
{
    let targets: Vec<Word> = dictionary
        .answers()
        .iter()
        .copied()
        .take(limit.unwrap_or(dictionary.answer_count()))
        .collect();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let wins_so_far = AtomicUsize::new(0);
    let done_so_far = AtomicUsize::new(0);
    let start = Instant::now();

    let records: Vec<GameRecord> = targets
        .par_iter()
        .map_init(&make_policy, |policy, &answer| {
            let record = play_game(dictionary, policy, answer);

            if record.outcome == GameOutcome::Win {
                wins_so_far.fetch_add(1, Ordering::Relaxed);
            }
            let done = done_so_far.fetch_add(1, Ordering::Relaxed) + 1;
            if done % 16 == 0 {
                let wins = wins_so_far.load(Ordering::Relaxed);
                pb.set_message(format!("wins: {wins}/{done}"));
            }
            pb.inc(1);

            record
        })
        .collect();

    pb.finish_with_message("done");
    let duration = start.elapsed();

    let mut report = BenchmarkReport {
        games_played: 0,
        wins: 0,
        losses: 0,
        failures: 0,
        total_guesses: 0,
        distribution: HashMap::new(),
        duration,
    };

    for record in &records {
        match record.outcome {
            GameOutcome::Win => {
                report.wins += 1;
                report.games_played += 1;
                report.total_guesses += record.guesses.len();
                *report.distribution.entry(record.guesses.len()).or_insert(0) += 1;
            }
            GameOutcome::Lose => {
                report.losses += 1;
                report.games_played += 1;
                report.total_guesses += record.guesses.len();
            }
            GameOutcome::Failed => report.failures += 1,
        }
    }

    (report, records)
}

/// Write one line per game: answer, outcome, and the rendered guess sequence
///
/// Called after the parallel section so transcript I/O never slows the games.
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
pub fn write_transcript(path: &Path, records: &[GameRecord]) -> io::Result<()> {
    let mut out = BufWriter::new(fs::File::create(path)?);
    for record in records {
        let outcome = match record.outcome {
            GameOutcome::Win => "win",
            GameOutcome::Lose => "lose",
            GameOutcome::Failed => "failed",
        };
        write!(out, "{} {outcome}", record.answer)?;
        for (guess, feedback) in &record.guesses {
            write!(out, " {guess}:{feedback}")?;
        }
        writeln!(out)?;
    }
    out.flush()
}

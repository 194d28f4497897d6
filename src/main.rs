//! Wordle Gym - CLI
//!
//! Play Wordle in the terminal or benchmark a guessing policy against every
//! answer word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_gym::{
    commands::{run_benchmark, run_play, write_transcript},
    game::Dictionary,
    output::print_benchmark_report,
    policy::PolicyKind,
};

#[derive(Parser)]
#[command(
    name = "wordle-gym",
    about = "Wordle game simulator and automated guessing-policy evaluator",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Random seed for answer selection and the random policy
    #[arg(short, long, global = true, default_value_t = 0)]
    seed: u64,

    /// Path to the valid-answers word list
    #[arg(long, global = true, default_value = "data/answer_words.txt")]
    answers: PathBuf,

    /// Path to the extra allowed-guesses word list
    #[arg(long, global = true, default_value = "data/allowed_words.txt")]
    allowed: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal (default)
    Play,

    /// Run a policy to completion against every answer word
    Bench {
        /// Policy: greedy (default) or random
        #[arg(short, long, default_value = "greedy")]
        policy: String,

        /// Only test the first N answers
        #[arg(short, long)]
        limit: Option<usize>,

        /// Write a per-game transcript log to this file
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = Dictionary::load(&cli.allowed, &cli.answers)
        .context("failed to load dictionary word lists")?;
    log::info!(
        "loaded {} answers and {} extra allowed words",
        dictionary.answer_count(),
        dictionary.allowed_count()
    );

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&dictionary, cli.seed).context("terminal game failed"),
        Commands::Bench {
            policy,
            limit,
            transcript,
        } => bench_command(&dictionary, &policy, cli.seed, limit, transcript),
    }
}

fn bench_command(
    dictionary: &Dictionary,
    policy_name: &str,
    seed: u64,
    limit: Option<usize>,
    transcript: Option<PathBuf>,
) -> Result<()> {
    let targets = limit
        .unwrap_or(dictionary.answer_count())
        .min(dictionary.answer_count());
    log::info!("benchmarking policy {policy_name} over {targets} answers");
    println!("Running {policy_name} policy against {targets} answers...");

    let (report, records) =
        run_benchmark(dictionary, || PolicyKind::from_name(policy_name, seed), limit);
    print_benchmark_report(&report);

    if let Some(path) = transcript {
        write_transcript(&path, &records)
            .with_context(|| format!("failed to write transcript to {}", path.display()))?;
        println!("\nTranscript written to {}", path.display());
    }

    Ok(())
}

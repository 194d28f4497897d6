//! Display functions for command results

use crate::commands::BenchmarkReport;
use colored::Colorize;

/// Print the result of a benchmark run
pub fn print_benchmark_report(report: &BenchmarkReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Played:           {}", report.games_played);
    println!(
        "   Wins:             {}",
        format!("{}", report.wins).green()
    );
    println!(
        "   Losses:           {}",
        format!("{}", report.losses).yellow()
    );
    if report.failures > 0 {
        println!(
            "   Failures:         {}",
            format!("{}", report.failures).red().bold()
        );
    }
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", report.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", report.average_guesses())
            .bright_yellow()
            .bold()
    );
    println!(
        "   Time taken:       {:.2}s",
        report.duration.as_secs_f64()
    );
    println!("   Games/second:     {:.1}", report.games_per_second());

    if report.wins == 0 {
        return;
    }

    println!("\n📈 {}", "Wins by guess count:".bright_cyan().bold());
    for guess_count in 1..=6 {
        if let Some(&count) = report.distribution.get(&guess_count) {
            let pct = (count as f64 / report.wins as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}

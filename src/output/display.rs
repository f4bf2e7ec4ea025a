//! Terminal rendering of command results

use super::formatters::{colored_guess, pattern_glyphs};
use crate::commands::{AnalysisReport, EvaluationStats, SolveReport};
use colored::Colorize;

/// Print an annotated solve run
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\nTarget: {}\n", report.target.to_uppercase().bold());

    for (i, step) in report.steps.iter().enumerate() {
        let rendered = colored_guess(&step.feedback);
        print!("{}. {rendered}", i + 1);

        if verbose {
            print!(
                "  {} -> {} candidates",
                step.candidates_before, step.candidates_after
            );
            if let Some(entropy) = step.entropy {
                print!("  ({entropy:.3} bits)");
            }
        }
        println!();
    }

    if report.solved {
        println!(
            "\n{} in {} attempts\n",
            "Solved".green().bold(),
            report.steps.len()
        );
    } else {
        println!("\n{} after {} attempts\n", "Unsolved".red().bold(), report.steps.len());
    }
}

/// Print the pattern distribution for an analyzed word
///
/// Shows the top rows only; the tail of rare patterns carries little
/// information for a human reader.
pub fn print_analysis(report: &AnalysisReport, top: usize) {
    println!(
        "\nAnalysis of {} against {} candidates",
        report.word.to_uppercase().bold(),
        report.candidate_count
    );
    println!(
        "Expected entropy: {} bits\n",
        format!("{:.3}", report.expected_entropy).bold()
    );

    println!("{:<12} {:>12} {:>10} {:>10}", "Pattern", "Probability", "Info", "Matches");
    for row in report.patterns.iter().take(top) {
        println!(
            "{:<12} {:>11.4}% {:>9.3}b {:>10}",
            pattern_glyphs(&row.pattern),
            row.probability * 100.0,
            row.self_information,
            row.matching
        );
    }

    if report.patterns.len() > top {
        println!("... and {} more patterns", report.patterns.len() - top);
    }
    println!();
}

/// Print aggregate statistics from a full-list evaluation
pub fn print_evaluation(stats: &EvaluationStats) {
    println!("\n{}", "═".repeat(50));
    println!(" Evaluation over {} words", stats.total);
    println!("{}", "═".repeat(50));

    let rate = if stats.total == 0 {
        0.0
    } else {
        stats.solved as f64 / stats.total as f64 * 100.0
    };
    println!("Solved:           {} ({rate:.1}%)", stats.solved);
    println!("Average attempts: {:.3}", stats.average_attempts);
    println!("Elapsed:          {:.2?}", stats.elapsed);

    println!("\nDistribution:");
    let mut attempts: Vec<_> = stats.distribution.iter().collect();
    attempts.sort();
    for (count, words) in attempts {
        let bar_len = (*words * 40).div_ceil(stats.total.max(1));
        println!("  {count}: {:>5}  {}", words, "█".repeat(bar_len));
    }

    if !stats.failed.is_empty() {
        println!("\n{}:", "Failed words".red().bold());
        for word in &stats.failed {
            println!("  • {}", word.to_uppercase());
        }
    }
    println!();
}

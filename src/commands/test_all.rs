//! Full-list evaluation
//!
//! Runs the solve loop against every word in the list and aggregates the
//! attempt distribution.

use crate::solver::{DEFAULT_MAX_ATTEMPTS, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Aggregate statistics from evaluating the whole list
#[derive(Debug)]
pub struct EvaluationStats {
    pub total: usize,
    pub solved: usize,
    /// Words the solver could not finish within the budget
    pub failed: Vec<String>,
    /// attempts -> number of words solved in that many attempts
    pub distribution: HashMap<usize, usize>,
    pub average_attempts: f64,
    pub elapsed: Duration,
}

/// Solve every word in the solver's list (or the first `limit` words)
///
/// # Panics
/// Panics if a list word fails re-validation, which cannot happen for a
/// list built through `WordList`.
#[must_use]
pub fn run_test_all(solver: &Solver<'_>, limit: Option<usize>) -> EvaluationStats {
    let targets: Vec<&str> = solver
        .words()
        .iter()
        .take(limit.unwrap_or(solver.words().len()))
        .map(|w| w.text())
        .collect();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut solved = 0usize;
    let mut failed: Vec<String> = Vec::new();
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_attempts = 0usize;

    let start = Instant::now();

    for (idx, target) in targets.iter().enumerate() {
        let trace = solver
            .solve(target, DEFAULT_MAX_ATTEMPTS)
            .expect("list words are pre-validated");

        total_attempts += trace.attempts.len();

        if trace.solved {
            solved += 1;
            *distribution.entry(trace.attempts.len()).or_insert(0) += 1;
        } else {
            failed.push((*target).to_string());
        }

        if idx % 10 == 0 && idx > 0 {
            let avg = total_attempts as f64 / (idx + 1) as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total = targets.len();
    EvaluationStats {
        total,
        solved,
        failed,
        distribution,
        average_attempts: if total == 0 {
            0.0
        } else {
            total_attempts as f64 / total as f64
        },
        elapsed: start.elapsed(),
    }
}

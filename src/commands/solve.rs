//! Solve command
//!
//! Runs the solve loop against a known target and annotates each attempt
//! with the information it was expected to reveal.

use crate::core::{FeedbackPattern, Word};
use crate::solver::{SolveError, Solver, expected_entropy};

/// One annotated attempt from a solve run
pub struct SolveStep {
    pub guess: Word,
    pub feedback: FeedbackPattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected entropy of the guess, when more than one candidate remained
    pub entropy: Option<f64>,
}

/// A solve trace annotated for presentation
pub struct SolveReport {
    pub target: String,
    pub solved: bool,
    pub steps: Vec<SolveStep>,
}

/// Solve `target` and build an annotated report
///
/// # Errors
/// Returns `SolveError` if the target word is invalid.
pub fn run_solve(
    solver: &Solver<'_>,
    target: &str,
    max_attempts: usize,
) -> Result<SolveReport, SolveError> {
    let trace = solver.solve(target, max_attempts)?;

    // Replay the history to recover per-attempt candidate counts and the
    // entropy each guess was scored with
    let mut history: Vec<(Word, FeedbackPattern)> = Vec::new();
    let mut steps = Vec::with_capacity(trace.attempts.len());

    for attempt in &trace.attempts {
        let candidates = solver.candidates(&history);
        let entropy = if candidates.len() > 1 {
            Some(expected_entropy(&attempt.guess, &candidates)?)
        } else {
            None
        };

        history.push((attempt.guess.clone(), attempt.feedback));

        steps.push(SolveStep {
            guess: attempt.guess.clone(),
            feedback: attempt.feedback,
            candidates_before: candidates.len(),
            candidates_after: attempt.remaining_candidates,
            entropy,
        });
    }

    Ok(SolveReport {
        target: trace.target.text().to_string(),
        solved: trace.solved,
        steps,
    })
}

//! Solving pipeline
//!
//! Probability/entropy scoring, candidate narrowing, guess selection, and
//! the attempt loop that ties them together.

pub mod entropy;
pub mod filter;
pub mod selector;

mod engine;

use crate::core::WordError;
use std::fmt;

pub use engine::{AttemptRecord, DEFAULT_MAX_ATTEMPTS, SolveState, SolveTrace, Solver};
pub use entropy::{PatternStatistics, expected_entropy, score_guess};
pub use filter::narrow;
pub use selector::{ScoredGuess, rank_guesses, select_guess};

/// Errors raised by the solving pipeline
///
/// All of these indicate caller misuse and are raised synchronously at the
/// point of violation. A candidate set narrowing to empty mid-solve is not
/// an error; it is reported through the solve trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A word failed validation (wrong length, non-ASCII, non-alphabetic)
    Word(WordError),
    /// Scoring was requested against zero candidates
    EmptyCandidateSet,
    /// Selection was requested against an empty guess pool
    NoCandidatesAvailable,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(e) => write!(f, "{e}"),
            Self::EmptyCandidateSet => write!(f, "Cannot score a guess against zero candidates"),
            Self::NoCandidatesAvailable => {
                write!(f, "Cannot select a guess from an empty pool")
            }
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for SolveError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

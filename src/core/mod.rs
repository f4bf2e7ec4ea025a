//! Core domain types
//!
//! The fundamental value types of the solver: validated words and
//! per-position feedback. All types here are pure and have clear
//! mathematical properties.

mod feedback;
mod word;

pub use feedback::{FeedbackPattern, LetterFeedback, LetterState};
pub use word::{Word, WordError};

//! entrodle
//!
//! An information-theoretic solver for 5-letter word-guessing puzzles.
//! Each guess is scored by its expected entropy: the number of bits of
//! information it is predicted to reveal about which candidate is the
//! secret word.
//!
//! # Quick Start
//!
//! ```rust
//! use entrodle::core::{FeedbackPattern, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! let pattern = FeedbackPattern::compute(&guess, &target);
//! assert!(!pattern.is_solved());
//! ```

// Core domain types
pub mod core;

// Solving pipeline
pub mod solver;

// Word lists
pub mod wordlist;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Formatting utilities for terminal output

use crate::core::{FeedbackPattern, LetterState};
use colored::Colorize;

/// Fixed glyph for each letter state
#[must_use]
pub const fn state_glyph(state: LetterState) -> char {
    match state {
        LetterState::Correct => '🟩',
        LetterState::Present => '🟨',
        LetterState::Absent => '⬜',
    }
}

/// Render a pattern as a five-glyph string
#[must_use]
pub fn pattern_glyphs(pattern: &FeedbackPattern) -> String {
    pattern.states().iter().map(|&s| state_glyph(s)).collect()
}

/// Render a guess with its feedback as colored uppercase letters
///
/// The pattern carries the guessed letters, so it is all that is needed.
/// Case is restored here, at the presentation boundary.
#[must_use]
pub fn colored_guess(pattern: &FeedbackPattern) -> String {
    pattern
        .slots()
        .iter()
        .map(|slot| {
            let letter = (slot.letter as char).to_ascii_uppercase().to_string();
            match slot.state {
                LetterState::Correct => letter.black().on_green().to_string(),
                LetterState::Present => letter.black().on_yellow().to_string(),
                LetterState::Absent => letter.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

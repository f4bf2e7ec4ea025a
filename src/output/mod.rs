//! Terminal output formatting

mod display;
mod formatters;

pub use display::{print_analysis, print_evaluation, print_solve_report};
pub use formatters::{colored_guess, pattern_glyphs, state_glyph};

//! Command implementations
//!
//! The bodies behind the CLI subcommands. These are thin orchestration
//! layers over the solving core; presentation lives in `output`.

mod analyze;
mod assist;
mod solve;
mod test_all;

pub use analyze::{AnalysisReport, PatternRow, analyze_word};
pub use assist::run_assist;
pub use solve::{SolveReport, SolveStep, run_solve};
pub use test_all::{EvaluationStats, run_test_all};

//! Analyze command
//!
//! Standalone exposure of the probability model: scores one word against
//! the current candidate list and reports its pattern distribution.

use crate::core::{FeedbackPattern, Word};
use crate::solver::{SolveError, expected_entropy, score_guess};
use crate::wordlist::WordList;

/// One row of the pattern distribution
#[derive(Debug)]
pub struct PatternRow {
    pub pattern: FeedbackPattern,
    pub probability: f64,
    pub self_information: f64,
    pub matching: usize,
}

/// Entropy analysis of a single word against a candidate list
#[derive(Debug)]
pub struct AnalysisReport {
    pub word: String,
    pub candidate_count: usize,
    pub expected_entropy: f64,
    /// Distribution rows, most probable first
    pub patterns: Vec<PatternRow>,
}

/// Score `word` against every word in `list`
///
/// # Errors
/// Returns `SolveError` if the word is invalid or the list is empty.
pub fn analyze_word(word: &str, list: &WordList) -> Result<AnalysisReport, SolveError> {
    let guess = Word::new(word)?;
    let candidates: Vec<&Word> = list.words().iter().collect();

    let stats = score_guess(&guess, &candidates)?;
    let entropy = expected_entropy(&guess, &candidates)?;

    let patterns = stats
        .into_iter()
        .map(|s| PatternRow {
            pattern: s.pattern,
            probability: s.probability,
            self_information: s.self_information,
            matching: s.matching_candidates.len(),
        })
        .collect();

    Ok(AnalysisReport {
        word: guess.text().to_string(),
        candidate_count: candidates.len(),
        expected_entropy: entropy,
        patterns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_probabilities_sum_to_one() {
        let list = WordList::from_embedded();
        let report = analyze_word("crane", &list).unwrap();

        let total: f64 = report.patterns.iter().map(|r| r.probability).sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert_eq!(report.candidate_count, list.len());
    }

    #[test]
    fn analysis_entropy_within_bounds() {
        let list = WordList::from_embedded();
        let report = analyze_word("slate", &list).unwrap();

        assert!(report.expected_entropy >= 0.0);
        assert!(report.expected_entropy <= (list.len() as f64).log2());
    }

    #[test]
    fn analysis_rows_sorted_by_probability() {
        let list = WordList::from_embedded();
        let report = analyze_word("house", &list).unwrap();

        for pair in report.patterns.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
    }

    #[test]
    fn analysis_rejects_invalid_word() {
        let list = WordList::from_embedded();
        assert!(analyze_word("toolong", &list).is_err());
    }

    #[test]
    fn analysis_of_empty_list_fails() {
        let list = WordList::from_strs(std::iter::empty::<&str>());
        assert_eq!(
            analyze_word("house", &list).unwrap_err(),
            SolveError::EmptyCandidateSet
        );
    }

    #[test]
    fn report_is_debug_printable() {
        let list = WordList::from_strs(["house", "mouse"]);
        let report = analyze_word("house", &list).unwrap();

        let rendered = format!("{report:?}");
        assert!(rendered.contains("AnalysisReport"));
        assert!(rendered.contains("PatternRow"));
    }
}

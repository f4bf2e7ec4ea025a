//! Probability model for guess scoring
//!
//! For a guess against a candidate set, partitions the candidates by the
//! feedback pattern they would produce and derives a probability and
//! self-information per partition. The expected entropy of a guess is the
//! probability-weighted average self-information: the number of bits the
//! guess is predicted to reveal about which candidate is correct.

use super::SolveError;
use crate::core::{FeedbackPattern, Word};
use rustc_hash::FxHashMap;

/// Statistics for one feedback pattern a guess could produce
#[derive(Debug, Clone)]
pub struct PatternStatistics<'a> {
    /// The pattern this partition corresponds to
    pub pattern: FeedbackPattern,
    /// Fraction of candidates producing this pattern, in [0, 1]
    pub probability: f64,
    /// -log2(probability): bits revealed if this pattern is observed
    pub self_information: f64,
    /// The candidates that would produce this pattern
    pub matching_candidates: Vec<&'a Word>,
}

/// Partition candidates by pattern and derive per-pattern statistics
///
/// Patterns are sorted by descending probability, with first-seen order
/// breaking ties (presentation only; nothing downstream depends on it).
///
/// # Errors
/// Returns `SolveError::EmptyCandidateSet` if `candidates` is empty.
///
/// # Examples
/// ```
/// use entrodle::core::Word;
/// use entrodle::solver::score_guess;
///
/// let guess = Word::new("solar").unwrap();
/// let house = Word::new("house").unwrap();
/// let stats = score_guess(&guess, &[&house]).unwrap();
///
/// assert_eq!(stats.len(), 1);
/// assert!((stats[0].probability - 1.0).abs() < 1e-9);
/// assert!(stats[0].self_information.abs() < 1e-9);
/// ```
pub fn score_guess<'a>(
    guess: &Word,
    candidates: &[&'a Word],
) -> Result<Vec<PatternStatistics<'a>>, SolveError> {
    if candidates.is_empty() {
        return Err(SolveError::EmptyCandidateSet);
    }

    let groups = group_by_pattern(guess, candidates);
    let total = candidates.len() as f64;

    let mut stats: Vec<PatternStatistics<'a>> = groups
        .into_iter()
        .map(|(pattern, matching)| {
            let probability = matching.len() as f64 / total;
            // Guard the undefined log of an empty group; cannot occur for a
            // pattern actually produced.
            let self_information = if probability > 0.0 {
                -probability.log2()
            } else {
                0.0
            };
            PatternStatistics {
                pattern,
                probability,
                self_information,
                matching_candidates: matching,
            }
        })
        .collect();

    // Stable sort keeps first-seen order among equal probabilities
    stats.sort_by(|a, b| b.probability.total_cmp(&a.probability));

    Ok(stats)
}

/// Expected entropy of a guess: Σ probability × self-information
///
/// # Errors
/// Returns `SolveError::EmptyCandidateSet` if `candidates` is empty.
///
/// # Properties
/// - 0 when every candidate produces the same pattern
/// - At most log2(|candidates|) (maximum entropy of a partition)
pub fn expected_entropy(guess: &Word, candidates: &[&Word]) -> Result<f64, SolveError> {
    let stats = score_guess(guess, candidates)?;
    Ok(stats
        .iter()
        .map(|s| s.probability * s.self_information)
        .sum())
}

/// Group candidates by the pattern they produce, preserving first-seen order
fn group_by_pattern<'a>(
    guess: &Word,
    candidates: &[&'a Word],
) -> Vec<(FeedbackPattern, Vec<&'a Word>)> {
    let mut groups: Vec<(FeedbackPattern, Vec<&'a Word>)> = Vec::new();
    let mut index: FxHashMap<FeedbackPattern, usize> = FxHashMap::default();

    for &candidate in candidates {
        let pattern = FeedbackPattern::compute(guess, candidate);
        match index.get(&pattern) {
            Some(&i) => groups[i].1.push(candidate),
            None => {
                index.insert(pattern, groups.len());
                groups.push((pattern, vec![candidate]));
            }
        }
    }

    groups
}

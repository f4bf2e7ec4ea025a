//! Guess selection
//!
//! Scans a pool of allowed guesses and picks the one with maximum expected
//! entropy against the current candidate set. The scan is parallelized with
//! rayon; scores are reduced in pool order afterwards, so equal entropies
//! always resolve to the first-encountered guess and the result is
//! deterministic.

use super::{SolveError, entropy};
use crate::core::Word;
use rayon::prelude::*;

/// A guess together with its expected entropy against some candidate set
///
/// Higher expected entropy is better; ties rank by pool order.
#[derive(Debug, Clone, Copy)]
pub struct ScoredGuess<'a> {
    pub guess: &'a Word,
    pub expected_entropy: f64,
}

/// Score every guess in the pool against the candidates, in pool order
///
/// # Errors
/// - `SolveError::NoCandidatesAvailable` if `pool` is empty
/// - `SolveError::EmptyCandidateSet` if `candidates` is empty
pub fn rank_guesses<'a>(
    pool: &[&'a Word],
    candidates: &[&Word],
) -> Result<Vec<ScoredGuess<'a>>, SolveError> {
    if pool.is_empty() {
        return Err(SolveError::NoCandidatesAvailable);
    }

    pool.par_iter()
        .map(|&guess| {
            entropy::expected_entropy(guess, candidates).map(|expected_entropy| ScoredGuess {
                guess,
                expected_entropy,
            })
        })
        .collect()
}

/// Select the best next guess
///
/// Policy:
/// - attempt 0 with a configured opening returns the opening unscored (an
///   established opening can be precomputed offline, amortizing the most
///   expensive full scan)
/// - a single remaining candidate is returned without scoring
/// - otherwise the pool is scored and the maximum expected entropy wins,
///   ties resolved by first position in the pool
///
/// # Errors
/// - `SolveError::NoCandidatesAvailable` if `pool` is empty
/// - `SolveError::EmptyCandidateSet` if scoring is reached with zero
///   candidates
pub fn select_guess<'a>(
    attempt_index: usize,
    candidates: &[&'a Word],
    pool: &[&'a Word],
    fixed_opening: Option<&'a Word>,
) -> Result<&'a Word, SolveError> {
    if pool.is_empty() {
        return Err(SolveError::NoCandidatesAvailable);
    }

    if attempt_index == 0
        && let Some(opening) = fixed_opening
    {
        return Ok(opening);
    }

    if let &[sole] = candidates {
        return Ok(sole);
    }

    let scored = rank_guesses(pool, candidates)?;

    // Strict comparison keeps the first-encountered guess on ties
    let best = scored
        .into_iter()
        .reduce(|best, next| {
            if next.expected_entropy > best.expected_entropy {
                next
            } else {
                best
            }
        })
        .expect("pool verified non-empty");

    Ok(best.guess)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn selects_highest_entropy() {
        let pool = words(&["aaaaa", "slate"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let pool_refs: Vec<&Word> = pool.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        // AAAAA cannot distinguish any of these; SLATE can
        let best = select_guess(1, &candidate_refs, &pool_refs, None).unwrap();
        assert_eq!(best.text(), "slate");
    }

    #[test]
    fn fixed_opening_short_circuits_first_attempt() {
        let pool = words(&["slate", "crane"]);
        let opening = Word::new("raise").unwrap();

        let pool_refs: Vec<&Word> = pool.iter().collect();

        let first = select_guess(0, &pool_refs, &pool_refs, Some(&opening)).unwrap();
        assert_eq!(first.text(), "raise");

        // Later attempts ignore the opening
        let later = select_guess(1, &pool_refs, &pool_refs, Some(&opening)).unwrap();
        assert_ne!(later.text(), "raise");
    }

    #[test]
    fn no_opening_scores_first_attempt() {
        let pool = words(&["aaaaa", "slate"]);
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        let pool_refs: Vec<&Word> = pool.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let best = select_guess(0, &candidate_refs, &pool_refs, None).unwrap();
        assert_eq!(best.text(), "slate");
    }

    #[test]
    fn single_candidate_skips_scoring() {
        let pool = words(&["crane", "slate", "irate"]);
        let sole = Word::new("irate").unwrap();

        let pool_refs: Vec<&Word> = pool.iter().collect();

        let best = select_guess(2, &[&sole], &pool_refs, None).unwrap();
        assert_eq!(best.text(), "irate");
    }

    #[test]
    fn empty_pool_fails() {
        let sole = Word::new("irate").unwrap();
        assert_eq!(
            select_guess(1, &[&sole], &[], None).unwrap_err(),
            SolveError::NoCandidatesAvailable
        );
    }

    #[test]
    fn ties_resolve_to_first_in_pool() {
        // Both guesses are equally uninformative; the first must win
        let pool = words(&["aaaaa", "bbbbb"]);
        let candidates = words(&["ccccc", "ddddd"]);

        let pool_refs: Vec<&Word> = pool.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        for _ in 0..5 {
            let best = select_guess(1, &candidate_refs, &pool_refs, None).unwrap();
            assert_eq!(best.text(), "aaaaa");
        }
    }

    #[test]
    fn rank_guesses_preserves_pool_order() {
        let pool = words(&["crane", "slate", "irate"]);
        let candidates = words(&["crate", "grate"]);

        let pool_refs: Vec<&Word> = pool.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let scored = rank_guesses(&pool_refs, &candidate_refs).unwrap();
        let order: Vec<&str> = scored.iter().map(|s| s.guess.text()).collect();
        assert_eq!(order, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn rank_guesses_empty_pool_fails() {
        let candidates = words(&["crate"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        assert_eq!(
            rank_guesses(&[], &candidate_refs).unwrap_err(),
            SolveError::NoCandidatesAvailable
        );
    }

    #[test]
    fn scoring_against_empty_candidates_fails() {
        let pool = words(&["crane", "slate"]);
        let pool_refs: Vec<&Word> = pool.iter().collect();

        assert_eq!(
            select_guess(1, &[], &pool_refs, None).unwrap_err(),
            SolveError::EmptyCandidateSet
        );
    }
}

//! Candidate narrowing
//!
//! Filters a candidate set down to the targets consistent with every
//! recorded (guess, feedback) pair.

use crate::core::{FeedbackPattern, Word};

/// Narrow candidates to those consistent with the accumulated history
///
/// A candidate survives only if replaying every recorded guess against it
/// reproduces the recorded pattern. Once the set is empty no later history
/// entry can un-empty it, so filtering short-circuits. An empty result is
/// a legitimate outcome (contradictory feedback), not an error.
///
/// Idempotent: re-applying the same history to its own output changes
/// nothing.
#[must_use]
pub fn narrow<'a>(
    candidates: &[&'a Word],
    history: &[(Word, FeedbackPattern)],
) -> Vec<&'a Word> {
    let mut remaining: Vec<&'a Word> = candidates.to_vec();

    for (guess, observed) in history {
        if remaining.is_empty() {
            break;
        }
        remaining.retain(|candidate| FeedbackPattern::compute(guess, candidate) == *observed);
    }

    remaining
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn empty_history_keeps_everything() {
        let candidates = words(&["house", "mouse", "slate"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let narrowed = narrow(&refs, &[]);
        assert_eq!(narrowed.len(), 3);
    }

    #[test]
    fn consistent_candidates_survive() {
        let candidates = words(&["irate", "crate", "grate", "house"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let guess = Word::new("crane").unwrap();
        let target = Word::new("irate").unwrap();
        let pattern = FeedbackPattern::compute(&guess, &target);

        let narrowed = narrow(&refs, &[(guess, pattern)]);
        assert!(narrowed.iter().any(|w| w.text() == "irate"));
        assert!(!narrowed.iter().any(|w| w.text() == "house"));
    }

    #[test]
    fn history_entries_apply_in_sequence() {
        let candidates = words(&["irate", "crate", "grate"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let target = Word::new("grate").unwrap();
        let g1 = Word::new("crane").unwrap();
        let g2 = Word::new("irate").unwrap();
        let history = vec![
            (g1.clone(), FeedbackPattern::compute(&g1, &target)),
            (g2.clone(), FeedbackPattern::compute(&g2, &target)),
        ];

        let narrowed = narrow(&refs, &history);
        assert!(narrowed.iter().any(|w| w.text() == "grate"));
        // CRATE fails the second entry: IRATE vs CRATE puts C elsewhere
        assert!(!narrowed.iter().any(|w| w.text() == "crate"));
    }

    #[test]
    fn contradictory_feedback_yields_empty_not_error() {
        let candidates = words(&["house", "mouse"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        // Claim ZZZZZ came back all Correct; nothing can satisfy that
        let guess = Word::new("zzzzz").unwrap();
        let impossible = FeedbackPattern::compute(&guess, &guess);

        let narrowed = narrow(&refs, &[(guess, impossible)]);
        assert!(narrowed.is_empty());
    }

    #[test]
    fn empty_set_short_circuits_later_entries() {
        let candidates = words(&["house"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let guess = Word::new("zzzzz").unwrap();
        let impossible = FeedbackPattern::compute(&guess, &guess);
        let follow = Word::new("house").unwrap();
        let follow_pattern = FeedbackPattern::compute(&follow, &follow);

        // The second entry would match HOUSE, but the set is already empty
        let narrowed = narrow(&refs, &[(guess, impossible), (follow, follow_pattern)]);
        assert!(narrowed.is_empty());
    }

    #[test]
    fn narrow_is_idempotent() {
        let candidates = words(&["irate", "crate", "grate", "slate", "house"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let guess = Word::new("crane").unwrap();
        let target = Word::new("slate").unwrap();
        let history = vec![(guess.clone(), FeedbackPattern::compute(&guess, &target))];

        let once = narrow(&refs, &history);
        let twice = narrow(&once, &history);
        assert_eq!(once, twice);
    }

    #[test]
    fn perfect_pattern_narrows_to_the_target() {
        let candidates = words(&["irate", "crate", "grate"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let guess = Word::new("irate").unwrap();
        let pattern = FeedbackPattern::compute(&guess, &guess);

        let narrowed = narrow(&refs, &[(guess, pattern)]);
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].text(), "irate");
    }
}

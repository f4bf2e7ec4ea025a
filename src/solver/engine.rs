//! The attempt loop
//!
//! Orchestrates narrowing, selection, and feedback computation across
//! attempts, producing a full trace of the solve. Given the same target,
//! word list, and attempt budget the loop is deterministic; there is no
//! randomness anywhere in the pipeline.

use super::{SolveError, filter, selector};
use crate::core::{FeedbackPattern, Word};

/// Default attempt budget, matching the puzzle's six guesses
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// State of a solve in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    InProgress,
    Solved,
    Exhausted,
}

/// One attempt: the guess, its feedback, and how many candidates survived
///
/// `remaining_candidates` is 0 when the feedback is all-Correct, and also
/// when the accumulated feedback became contradictory.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptRecord {
    pub guess: Word,
    pub feedback: FeedbackPattern,
    pub remaining_candidates: usize,
}

/// Complete record of one solve invocation
#[derive(Debug, Clone, PartialEq)]
pub struct SolveTrace {
    pub target: Word,
    pub attempts: Vec<AttemptRecord>,
    pub solved: bool,
}

/// Solver over an injected read-only word list
///
/// The list is supplied by the caller at construction; the solver holds no
/// global state and every `solve` call is independent.
pub struct Solver<'a> {
    words: &'a [Word],
    opening: Option<Word>,
}

impl<'a> Solver<'a> {
    /// Create a solver over the given word list
    #[must_use]
    pub const fn new(words: &'a [Word]) -> Self {
        Self {
            words,
            opening: None,
        }
    }

    /// Configure a precomputed opening guess for attempt 0
    ///
    /// Without an opening, the first attempt runs a full scoring scan like
    /// any other attempt.
    #[must_use]
    pub fn with_opening(mut self, opening: Word) -> Self {
        self.opening = Some(opening);
        self
    }

    /// The word list this solver draws candidates from
    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    /// Candidates consistent with the given history
    #[must_use]
    pub fn candidates(&self, history: &[(Word, FeedbackPattern)]) -> Vec<&'a Word> {
        let full: Vec<&Word> = self.words.iter().collect();
        filter::narrow(&full, history)
    }

    /// Select the next guess for the given attempt and history
    ///
    /// The guess pool is the remaining candidate set itself.
    ///
    /// # Errors
    /// Returns `SolveError::NoCandidatesAvailable` when the history has
    /// become contradictory and no candidate remains.
    pub fn next_guess(
        &self,
        attempt_index: usize,
        history: &[(Word, FeedbackPattern)],
    ) -> Result<&Word, SolveError> {
        let candidates = self.candidates(history);
        selector::select_guess(attempt_index, &candidates, &candidates, self.opening.as_ref())
    }

    /// Solve for a known target, producing the full attempt trace
    ///
    /// Per attempt: narrow the candidates, select a guess, compute its
    /// feedback against the true target, and record the surviving
    /// candidate count. Terminates Solved on all-Correct feedback, or
    /// Exhausted when the budget runs out. A candidate set that narrows to
    /// empty mid-solve ends the trace unsolved rather than failing.
    ///
    /// # Errors
    /// Returns `SolveError::Word` (length mismatch and friends) if
    /// `target` is invalid, before any attempt runs.
    ///
    /// # Examples
    /// ```no_run
    /// use entrodle::solver::{DEFAULT_MAX_ATTEMPTS, Solver};
    /// use entrodle::wordlist::WordList;
    ///
    /// let list = WordList::from_embedded();
    /// let solver = Solver::new(list.words());
    /// let trace = solver.solve("house", DEFAULT_MAX_ATTEMPTS).unwrap();
    /// assert!(trace.solved);
    /// ```
    pub fn solve(&self, target: &str, max_attempts: usize) -> Result<SolveTrace, SolveError> {
        let target = Word::new(target)?;

        let mut history: Vec<(Word, FeedbackPattern)> = Vec::new();
        let mut attempts: Vec<AttemptRecord> = Vec::new();
        let mut state = SolveState::InProgress;

        for attempt_index in 0..max_attempts {
            let candidates = self.candidates(&history);

            if candidates.is_empty() {
                // Contradictory feedback: a valid terminal data state,
                // surfaced through the trace
                state = SolveState::Exhausted;
                break;
            }

            let guess = selector::select_guess(
                attempt_index,
                &candidates,
                &candidates,
                self.opening.as_ref(),
            )?
            .clone();

            let feedback = FeedbackPattern::compute(&guess, &target);
            history.push((guess.clone(), feedback));

            let remaining_candidates = if feedback.is_solved() {
                0
            } else {
                self.candidates(&history).len()
            };

            attempts.push(AttemptRecord {
                guess,
                feedback,
                remaining_candidates,
            });

            if feedback.is_solved() {
                state = SolveState::Solved;
                break;
            }
        }

        if state == SolveState::InProgress {
            state = SolveState::Exhausted;
        }

        Ok(SolveTrace {
            target,
            attempts,
            solved: state == SolveState::Solved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlist::WordList;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn solve_invalid_target_fails_before_attempts() {
        let list = words(&["house", "mouse"]);
        let solver = Solver::new(&list);

        let err = solver.solve("abc", DEFAULT_MAX_ATTEMPTS).unwrap_err();
        assert!(matches!(err, SolveError::Word(_)));
    }

    #[test]
    fn solve_small_list_terminates_solved() {
        let list = words(&["irate", "crate", "grate", "slate", "house"]);
        let solver = Solver::new(&list);

        let trace = solver.solve("grate", DEFAULT_MAX_ATTEMPTS).unwrap();
        assert!(trace.solved);
        assert!(trace.attempts.len() <= DEFAULT_MAX_ATTEMPTS);

        let last = trace.attempts.last().unwrap();
        assert!(last.feedback.is_solved());
        assert_eq!(last.remaining_candidates, 0);
        assert_eq!(last.guess.text(), "grate");
    }

    #[test]
    fn remaining_counts_decrease_monotonically() {
        let list = words(&["irate", "crate", "grate", "slate", "plate"]);
        let solver = Solver::new(&list);

        let trace = solver.solve("plate", DEFAULT_MAX_ATTEMPTS).unwrap();
        for pair in trace.attempts.windows(2) {
            assert!(pair[1].remaining_candidates <= pair[0].remaining_candidates);
        }
    }

    #[test]
    fn opening_is_used_on_first_attempt_only() {
        let list = words(&["irate", "crate", "grate", "slate"]);
        let solver = Solver::new(&list).with_opening(Word::new("slate").unwrap());

        let trace = solver.solve("irate", DEFAULT_MAX_ATTEMPTS).unwrap();
        assert_eq!(trace.attempts[0].guess.text(), "slate");
        assert!(trace.solved);
    }

    #[test]
    fn solve_with_budget_one_makes_exactly_one_attempt() {
        let list = WordList::from_embedded();
        let solver = Solver::new(list.words()).with_opening(Word::new("raise").unwrap());

        let trace = solver.solve("house", 1).unwrap();
        assert_eq!(trace.attempts.len(), 1);
        assert!(!trace.solved);
    }

    #[test]
    fn solve_house_against_reference_list() {
        let list = WordList::from_embedded();
        let solver = Solver::new(list.words());

        let trace = solver.solve("house", DEFAULT_MAX_ATTEMPTS).unwrap();
        assert!(trace.solved);
        assert!(trace.attempts.len() <= DEFAULT_MAX_ATTEMPTS);
        assert_eq!(trace.attempts.last().unwrap().remaining_candidates, 0);
    }

    #[test]
    fn solve_is_deterministic() {
        let list = WordList::from_embedded();
        let solver = Solver::new(list.words()).with_opening(Word::new("raise").unwrap());

        let first = solver.solve("solar", DEFAULT_MAX_ATTEMPTS).unwrap();
        let second = solver.solve("solar", DEFAULT_MAX_ATTEMPTS).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn next_guess_returns_sole_candidate() {
        let list = words(&["irate", "crate"]);
        let solver = Solver::new(&list);

        let target = Word::new("irate").unwrap();
        let guess = Word::new("crate").unwrap();
        let history = vec![(guess.clone(), FeedbackPattern::compute(&guess, &target))];

        let next = solver.next_guess(1, &history).unwrap();
        assert_eq!(next.text(), "irate");
    }

    #[test]
    fn contradictory_history_is_not_an_error() {
        let list = words(&["house", "mouse"]);
        let solver = Solver::new(&list);

        let zz = Word::new("zzzzz").unwrap();
        let impossible = FeedbackPattern::compute(&zz, &zz);
        let history = vec![(zz, impossible)];

        assert!(solver.candidates(&history).is_empty());
        assert_eq!(
            solver.next_guess(1, &history).unwrap_err(),
            SolveError::NoCandidatesAvailable
        );
    }
}

//! Feedback computation and representation
//!
//! A feedback pattern records, per position, whether the guessed letter is
//! in the right place (Correct), elsewhere in the target (Present), or not
//! in the target at all (Absent). Duplicate letters follow exact Wordle
//! semantics: exact-position matches are reserved first, and a letter is
//! only marked Present while unexplained occurrences remain in the target.

use super::Word;

/// Per-position verdict for one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    /// Right letter, right position
    Correct,
    /// Letter occurs in the target, but at a different position
    Present,
    /// Letter does not occur in the target (or all occurrences are spoken for)
    Absent,
}

/// One guessed letter together with its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterFeedback {
    pub letter: u8,
    pub state: LetterState,
}

/// Full feedback for one guess: five ordered letter verdicts
///
/// Order-significant and hashable, so it doubles as the grouping key when
/// partitioning candidates by the pattern they would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern {
    slots: [LetterFeedback; 5],
}

impl FeedbackPattern {
    /// Compute the feedback when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact-position matches Correct and deduct them
    ///    from the target's per-letter budget
    /// 2. Second pass: left to right, mark Present while budget for that
    ///    letter remains, else Absent
    ///
    /// Reserving exact matches first guarantees a letter is never marked
    /// Present more times than the target leaves unexplained.
    ///
    /// # Examples
    /// ```
    /// use entrodle::core::{FeedbackPattern, LetterState, Word};
    ///
    /// let guess = Word::new("alley").unwrap();
    /// let target = Word::new("plane").unwrap();
    /// let pattern = FeedbackPattern::compute(&guess, &target);
    ///
    /// // A(present) L(correct) L(absent) E(present) Y(absent)
    /// assert_eq!(
    ///     pattern.states(),
    ///     [
    ///         LetterState::Present,
    ///         LetterState::Correct,
    ///         LetterState::Absent,
    ///         LetterState::Present,
    ///         LetterState::Absent,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, target: &Word) -> Self {
        let mut states = [LetterState::Absent; 5];
        let mut target_available = target.char_counts();

        // First pass: exact-position matches
        // Allow: index needed to compare guess[i] with target[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.chars()[i] == target.chars()[i] {
                states[i] = LetterState::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = target_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong-position matches against the remaining budget
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if states[i] == LetterState::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = target_available.get_mut(&letter)
                    && *count > 0
                {
                    states[i] = LetterState::Present;
                    *count -= 1;
                }
            }
        }

        let mut slots = [LetterFeedback {
            letter: 0,
            state: LetterState::Absent,
        }; 5];
        for i in 0..5 {
            slots[i] = LetterFeedback {
                letter: guess.chars()[i],
                state: states[i],
            };
        }

        Self { slots }
    }

    /// The five letter verdicts, in guess order
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[LetterFeedback; 5] {
        &self.slots
    }

    /// Just the five states, in guess order
    #[must_use]
    pub fn states(&self) -> [LetterState; 5] {
        self.slots.map(|slot| slot.state)
    }

    /// Check whether every position is Correct (the guess was the target)
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.slots
            .iter()
            .all(|slot| slot.state == LetterState::Correct)
    }

    /// Parse the states of a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for Correct
    /// - 'Y'/'y'/🟨 for Present
    /// - '-'/'_'/⬜ for Absent
    ///
    /// The letters are taken from `guess`, since observed feedback arrives
    /// as colors for a guess the caller already knows.
    ///
    /// # Examples
    /// ```
    /// use entrodle::core::{FeedbackPattern, Word};
    ///
    /// let guess = Word::new("house").unwrap();
    /// let p1 = FeedbackPattern::from_glyphs(&guess, "GY-GY").unwrap();
    /// let p2 = FeedbackPattern::from_glyphs(&guess, "🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn from_glyphs(guess: &Word, s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != 5 {
            return None;
        }

        let mut slots = [LetterFeedback {
            letter: 0,
            state: LetterState::Absent,
        }; 5];

        for (i, ch) in chars.into_iter().enumerate() {
            let state = match ch {
                'G' | 'g' | '🟩' => LetterState::Correct,
                'Y' | 'y' | '🟨' => LetterState::Present,
                '-' | '_' | '⬜' => LetterState::Absent,
                _ => return None,
            };
            slots[i] = LetterFeedback {
                letter: guess.chars()[i],
                state,
            };
        }

        Some(Self { slots })
    }
}

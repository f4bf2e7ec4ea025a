//! Reference word list handling
//!
//! The solver takes its word list as an explicitly constructed, injected
//! handle owned by the caller. There is no implicit global instance and no
//! lazy initialization; construct a `WordList` once and pass it where it
//! is needed.

mod embedded;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// An ordered, deduplicated, read-only collection of valid words
///
/// Malformed entries are rejected at construction; everything downstream
/// can assume exactly-5-letter lowercase words.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list from the embedded reference words
    #[must_use]
    pub fn from_embedded() -> Self {
        Self::from_strs(WORDS.iter().copied())
    }

    /// Build a list from string entries, skipping malformed ones
    ///
    /// Duplicates are dropped, keeping first-seen order.
    pub fn from_strs<'s>(entries: impl IntoIterator<Item = &'s str>) -> Self {
        let mut words: Vec<Word> = Vec::new();
        for entry in entries {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Ok(word) = Word::new(trimmed)
                && !words.contains(&word)
            {
                words.push(word);
            }
        }
        Self { words }
    }

    /// Load a list from a file with one word per line
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use entrodle::wordlist::WordList;
    ///
    /// let list = WordList::from_file("data/words.txt").unwrap();
    /// println!("Loaded {} words", list.len());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_strs(content.lines()))
    }

    /// The words, in list order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let needle = text.to_lowercase();
        self.words.iter().find(|w| w.text() == needle)
    }
}

//! Jotto word representation
//!
//! A Word stores a lowercase token of any length along with letter counts for
//! multiset scoring. Unlike Wordle, Jotto does not fix the word length; a
//! session simply requires every guess to match the secret word's length.

use rustc_hash::FxHashMap;
use std::fmt;

/// A lowercase ASCII word
///
/// Stores the normalized text and maintains a count of each letter for
/// duplicate handling during scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    char_counts: FxHashMap<u8, usize>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased before
    /// validation, so raw word-list lines and console input can be passed in
    /// directly.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed text:
    /// - Is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use jotto::core::Word;
    ///
    /// let word = Word::new("  TRACE\n").unwrap();
    /// assert_eq!(word.text(), "trace");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("tr4ce").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text: String = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Build letter counts for multiset scoring
        let mut char_counts: FxHashMap<u8, usize> = FxHashMap::default();
        for b in text.bytes() {
            *char_counts.entry(b).or_insert(0) += 1;
        }

        Ok(Self { text, char_counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; `Word::new` rejects empty input
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for multiset scoring with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> &FxHashMap<u8, usize> {
        &self.char_counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crate").unwrap();
        assert_eq!(word.text(), "crate");
        assert_eq!(word.bytes(), b"crate");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRATE").unwrap();
        assert_eq!(word.text(), "crate");

        let word2 = Word::new("CrAtE").unwrap();
        assert_eq!(word2.text(), "crate");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  trace\n").unwrap();
        assert_eq!(word.text(), "trace");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("ox").unwrap().len(), 2);
        assert_eq!(Word::new("deduction").unwrap().len(), 9);
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
        assert!(matches!(Word::new("   \n"), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cra7e").is_err()); // Number
        assert!(Word::new("cr ate").is_err()); // Interior space
        assert!(Word::new("crate!").is_err()); // Punctuation
    }

    #[test]
    fn word_creation_non_ascii() {
        assert!(matches!(Word::new("cräte"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("eerie").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'e'), Some(&3));
        assert_eq!(counts.get(&b'r'), Some(&1));
        assert_eq!(counts.get(&b'i'), Some(&1));
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn word_char_counts_all_unique() {
        let word = Word::new("react").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| count == 1));
    }

    #[test]
    fn word_display() {
        let word = Word::new("trace").unwrap();
        assert_eq!(format!("{word}"), "trace");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("trace").unwrap();
        let word2 = Word::new("TRACE").unwrap();
        let word3 = Word::new("react").unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}

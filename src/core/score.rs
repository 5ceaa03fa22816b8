//! Guess scoring
//!
//! Compares a guess against the secret word and reports two counts: letters in
//! common (multiset intersection, position ignored) and letters in place
//! (exact positional matches). The pair lets the player deduce letter
//! composition without being told positions outright.

use super::Word;
use std::fmt;

/// The score for one guess against the secret word
///
/// Invariant: `letters_in_place <= letters_in_common <= word length`.
/// Positional matches are a subset of the multiset intersection, so the
/// ordering always holds for equal-length inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Letters shared between guess and secret as multisets: for each letter,
    /// the smaller of its two multiplicities, summed over all letters.
    pub letters_in_common: usize,
    /// Positions where guess and secret hold the same letter.
    pub letters_in_place: usize,
}

impl Score {
    /// Calculate the score for a guess against the secret word.
    ///
    /// Repeated letters count only up to the smaller multiplicity: scoring
    /// "eerie" against "eager" shares two 'e's, not three, because "eager"
    /// only has two.
    ///
    /// Both inputs must have the same length; the session enforces this before
    /// a guess ever reaches scoring.
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(guess.len(), secret.len());

        let letters_in_place = guess
            .bytes()
            .iter()
            .zip(secret.bytes())
            .filter(|(g, s)| g == s)
            .count();

        let secret_counts = secret.char_counts();
        let letters_in_common = guess
            .char_counts()
            .iter()
            .map(|(letter, &count)| count.min(*secret_counts.get(letter).unwrap_or(&0)))
            .sum();

        Self {
            letters_in_common,
            letters_in_place,
        }
    }

    /// Check whether this score means the guess matched the secret word
    ///
    /// True exactly when every position matched, i.e. `letters_in_place`
    /// equals the word length.
    #[inline]
    #[must_use]
    pub fn is_win(self, word_length: usize) -> bool {
        self.letters_in_place == word_length
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in common, {} in place",
            self.letters_in_common, self.letters_in_place
        )
    }
}

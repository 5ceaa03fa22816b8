//! Game session state
//!
//! One session owns one secret word and a guess counter. The REPL holds the
//! session and passes it to scoring; there is no process-wide game state.

use crate::core::{Score, Word};

/// State for a single game: the secret word and how many guesses were scored
#[derive(Debug)]
pub struct Session {
    secret: Word,
    guess_count: u32,
}

impl Session {
    /// Start a session around a freshly selected secret word
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            guess_count: 0,
        }
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Length every guess must have
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    /// Number of guesses scored so far
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    /// Score a guess against the secret word
    ///
    /// Counts the guess and returns its score. Length mismatches must be
    /// rejected before calling; the engine assumes equal length.
    pub fn score_guess(&mut self, guess: &Word) -> Score {
        debug_assert_eq!(guess.len(), self.secret.len());

        self.guess_count += 1;
        Score::calculate(guess, &self.secret)
    }

    /// Check whether a score from this session's secret word is a win
    #[inline]
    #[must_use]
    pub fn is_won(&self, score: Score) -> bool {
        score.is_win(self.secret.len())
    }
}

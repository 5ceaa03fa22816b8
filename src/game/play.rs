//! Interactive game loop
//!
//! Text-based REPL: prompt for a guess, score it, repeat until the secret word
//! is hit. Bad input never ends the game; only a correct guess does.

use crate::core::{Word, WordError};
use crate::game::Session;
use crate::output::display::{print_score, print_win, print_word_length};
use anyhow::Result;
use std::io::{self, Write as _};

/// Why a line of player input was rejected
#[derive(Debug, PartialEq, Eq)]
pub enum GuessError {
    /// Guess length differs from the secret word's length
    LengthMismatch { expected: usize, actual: usize },
    /// Guess is not a usable word (empty, non-alphabetic)
    Invalid(WordError),
}

/// Validate one line of player input against the expected word length
///
/// Trims and lowercases before checking, so the raw console line can be
/// passed straight in. Length is checked against the normalized text; a guess
/// padded with spaces is not a mismatch.
///
/// # Errors
/// Returns `GuessError` if the input is not a word or has the wrong length.
pub fn parse_guess(input: &str, expected_length: usize) -> Result<Word, GuessError> {
    let word = Word::new(input).map_err(GuessError::Invalid)?;

    if word.len() != expected_length {
        return Err(GuessError::LengthMismatch {
            expected: expected_length,
            actual: word.len(),
        });
    }

    Ok(word)
}

/// Run the interactive game loop until the secret word is guessed
///
/// # Errors
///
/// Returns an error if stdin is closed or stdout cannot be flushed; malformed
/// guesses are reported and re-prompted, not propagated.
pub fn run_play(mut session: Session) -> Result<()> {
    print_word_length(session.word_length());

    loop {
        let Some(line) = read_guess_line()? else {
            // EOF on stdin; nothing more to read, treat as quitting.
            println!();
            return Ok(());
        };

        let guess = match parse_guess(&line, session.word_length()) {
            Ok(guess) => guess,
            Err(GuessError::LengthMismatch { expected, actual }) => {
                println!(
                    "Incorrect number of letters ({actual}). The secret word is {expected} letters long."
                );
                continue;
            }
            Err(GuessError::Invalid(err)) => {
                println!("{err}. Try again.");
                continue;
            }
        };

        let score = session.score_guess(&guess);
        if session.is_won(score) {
            print_win(&session);
            return Ok(());
        }

        print_score(score, session.guess_count());
    }
}

/// Prompt and read one line from stdin; `None` on EOF
fn read_guess_line() -> Result<Option<String>> {
    print!("\nEnter guess: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes_read = io::stdin().read_line(&mut input)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    Ok(Some(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_guess_accepts_matching_length() {
        let guess = parse_guess("react", 5).unwrap();
        assert_eq!(guess.text(), "react");
    }

    #[test]
    fn parse_guess_normalizes_input() {
        let guess = parse_guess("  REACT\n", 5).unwrap();
        assert_eq!(guess.text(), "react");
    }

    #[test]
    fn parse_guess_rejects_wrong_length() {
        assert_eq!(
            parse_guess("reacts", 5),
            Err(GuessError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(
            parse_guess("cat", 5),
            Err(GuessError::LengthMismatch {
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn parse_guess_rejects_non_words() {
        assert_eq!(
            parse_guess("", 5),
            Err(GuessError::Invalid(WordError::Empty))
        );
        assert_eq!(
            parse_guess("re4ct", 5),
            Err(GuessError::Invalid(WordError::InvalidCharacters))
        );
    }

    #[test]
    fn parse_guess_length_checked_after_trimming() {
        // Five letters plus padding is still a five-letter guess.
        let guess = parse_guess("  react  ", 5).unwrap();
        assert_eq!(guess.len(), 5);
    }
}

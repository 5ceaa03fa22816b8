//! Secret-word selection
//!
//! Two-pass uniform selection from a line-oriented word-list file: one pass to
//! count the lines, one draw from the picker, then a second pass to fetch the
//! chosen line. The file is never held in memory, so the list can be
//! arbitrarily large. Each pass opens its own handle and drops it when done.

use crate::core::{Word, WordError};
use crate::wordlists::picker::IndexPicker;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Error type for secret-word selection
#[derive(Debug)]
pub enum SelectError {
    /// The word-list file could not be opened or read
    Io(io::Error),
    /// The word-list file contains no lines
    EmptyList,
    /// The selected line is not a usable word (blank or non-alphabetic)
    InvalidWord(WordError),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Could not read word list: {err}"),
            Self::EmptyList => write!(f, "Word list contains no words"),
            Self::InvalidWord(err) => write!(f, "Selected word is unusable: {err}"),
        }
    }
}

impl std::error::Error for SelectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::EmptyList => None,
            Self::InvalidWord(err) => Some(err),
        }
    }
}

impl From<io::Error> for SelectError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<WordError> for SelectError {
    fn from(err: WordError) -> Self {
        Self::InvalidWord(err)
    }
}

/// Select one secret word uniformly at random from a word-list file
///
/// Every line has the same chance of being chosen regardless of list length.
/// The winning line is trimmed and lowercased on the way out.
///
/// # Errors
/// - `SelectError::Io` if the file cannot be opened or read
/// - `SelectError::EmptyList` if the file has zero lines
/// - `SelectError::InvalidWord` if the chosen line is blank or contains
///   non-alphabetic characters
pub fn select_secret_word<P: AsRef<Path>>(
    path: P,
    picker: &mut dyn IndexPicker,
) -> Result<Word, SelectError> {
    let path = path.as_ref();

    let line_count = count_lines(BufReader::new(File::open(path)?))?;
    if line_count == 0 {
        return Err(SelectError::EmptyList);
    }

    let index = picker.pick(line_count);

    let line = line_at(BufReader::new(File::open(path)?), index)?
        .ok_or(SelectError::EmptyList)?;

    Ok(Word::new(line)?)
}

/// Count the lines in a word list
fn count_lines(reader: impl BufRead) -> io::Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        line?;
        count += 1;
    }
    Ok(count)
}

/// Fetch the line at the given 0-based index
///
/// Returns `None` if the list has fewer lines than `index + 1`; unreachable
/// when `index` came from a count of the same file.
fn line_at(reader: impl BufRead, index: usize) -> io::Result<Option<String>> {
    for (current, line) in reader.lines().enumerate() {
        let line = line?;
        if current == index {
            return Ok(Some(line));
        }
    }
    Ok(None)
}

//! Jotto
//!
//! A single-player word-deduction game: a secret word is drawn at random from a
//! word list and the player guesses same-length words until they hit it. Each
//! miss is scored by letters in common (multiset intersection, position
//! ignored) and letters in place (exact positional matches).
//!
//! # Quick Start
//!
//! ```rust
//! use jotto::core::{Score, Word};
//!
//! let secret = Word::new("trace").unwrap();
//! let guess = Word::new("react").unwrap();
//!
//! let score = Score::calculate(&guess, &secret);
//! assert_eq!(score.letters_in_common, 5);
//! assert_eq!(score.letters_in_place, 2);
//! ```

/// Application name shown by the version flag and banners.
pub const APP_NAME: &str = "Jotto";

/// Vendor string shown by the version flag.
pub const APP_VENDOR: &str = "Jotto Maintainers";

// Core domain types
pub mod core;

// Session state and the interactive game loop
pub mod game;

// Terminal output formatting
pub mod output;

// Word lists and secret-word selection
pub mod wordlists;

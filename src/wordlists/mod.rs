//! Word lists and secret-word selection
//!
//! Selects one secret word uniformly at random from a line-oriented word-list
//! file without materializing the list in memory. Randomness goes through the
//! [`IndexPicker`] trait so tests can force a deterministic choice.

pub mod picker;
pub mod select;

pub use picker::{IndexPicker, TimeSeededPicker};
pub use select::{SelectError, select_secret_word};

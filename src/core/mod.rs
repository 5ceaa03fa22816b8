//! Core domain types for Jotto
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod score;
mod word;

pub use score::Score;
pub use word::{Word, WordError};

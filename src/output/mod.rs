//! Terminal output formatting

pub mod display;

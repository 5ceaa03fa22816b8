//! Game session state and the interactive loop

pub mod play;
pub mod session;

pub use play::run_play;
pub use session::Session;

//! Presentation layer for steward
//!
//! This crate contains CLI definitions, console rendering,
//! progress reporters, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::Console;
pub use progress::reporter::{SimpleProgress, SpinnerProgress};

//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface for steward.

mod repl;

pub use repl::ChatRepl;

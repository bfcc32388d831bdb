//! Prompt domain
//!
//! System prompt assembly: the operational persona plus optional
//! caller-supplied preference context.

mod template;

pub use template::{PreferenceContext, SystemPrompt};

//! Conversation domain.
//!
//! Models the message history the agent maintains per session, in the shape
//! the tool-use transport expects:
//!
//! - [`entities::Message`] — a role plus ordered content blocks
//! - [`entities::ContentBlock`] — text, tool_use, or tool_result
//! - [`response::LlmReply`] — an assembled model reply with its stop reason
//! - [`manager::ConversationManager`] — the bounded history itself
//!
//! Two roles only (`user` / `assistant`). System text is a separate
//! top-level request field, and tool results travel as user-role messages,
//! so these two cover the entire history.

pub mod entities;
pub mod manager;
pub mod response;

pub use entities::{ApiMessage, ContentBlock, Message, Role};
pub use manager::{
    ConversationDiagnostics, ConversationManager, ConversationSummary, DEFAULT_MAX_HISTORY,
};
pub use response::{LlmReply, StopReason};

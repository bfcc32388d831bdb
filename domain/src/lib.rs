//! Domain layer for steward
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! A bounded, ordered message history in the two-role shape the tool-use
//! transport expects. Tool results travel as user-role messages correlated
//! by id; trimming evicts from the front and is deliberately blind to
//! tool_use/tool_result pairing.
//!
//! ## Safety
//!
//! A stateless validator classifies every command, tool call, and resource
//! operation before anything executes, and scrubs credential-shaped tokens
//! out of tool output before it re-enters the conversation.
//!
//! ## Tools
//!
//! Definitions, calls, and results, plus the [`tool::ToolProvider`]
//! abstraction the infrastructure layer plugs concrete capabilities into.

pub mod conversation;
pub mod core;
pub mod prompt;
pub mod safety;
pub mod tool;

// Re-export commonly used types
pub use conversation::{
    entities::{ApiMessage, ContentBlock, Message, Role},
    manager::{ConversationDiagnostics, ConversationManager, ConversationSummary},
    response::{LlmReply, StopReason},
};
pub use core::model::Model;
pub use prompt::{PreferenceContext, SystemPrompt};
pub use safety::{
    policy::{PentestPolicy, SafetyPolicy, ScanIntensity},
    validator::SafetyValidator,
    value_objects::{RiskLevel, ValidationResult},
};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    provider::{ProviderError, ToolProvider},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};

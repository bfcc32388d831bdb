//! Application layer for steward
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AgentParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{ChatRequest, GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    tool_executor::ToolExecutorPort,
};
pub use use_cases::orchestrator::{AgentOrchestrator, ExportedMessage};

//! LLM Gateway port
//!
//! Defines the interface for communicating with LLM providers.
//!
//! The gateway is stateless: the orchestrator owns conversation history and
//! sends the full message list on every call, so an adapter is a single
//! request/response exchange with no session object to manage.

use async_trait::async_trait;
use steward_domain::{ApiMessage, LlmReply, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Heuristic for conversation-state corruption.
    ///
    /// The tool-use protocol requires every `tool_use` block to be answered
    /// by a `tool_result` with the same id in the next user message. When
    /// history violates that pairing (typically after trimming splits a
    /// pair), the API rejects the request with an invalid-request error
    /// naming the mismatched blocks. There is no structured error code for
    /// this, so detection is by message text.
    pub fn is_history_corruption(&self) -> bool {
        match self {
            GatewayError::InvalidRequest(message) => {
                let message = message.to_ascii_lowercase();
                message.contains("tool_use") && message.contains("tool_result")
            }
            _ => false,
        }
    }
}

/// A single chat-completion request.
///
/// Carries everything an adapter needs to build the wire call: the model,
/// sampling parameters, optional system prompt, tool schema catalogue, and
/// the full message history.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: Model,
    pub max_tokens: u32,
    pub temperature: f64,
    pub system: Option<String>,
    /// Tool schemas in the shape the API expects
    /// (`{name, description, input_schema}` each).
    pub tools: Vec<serde_json::Value>,
    pub messages: Vec<ApiMessage>,
}

impl ChatRequest {
    pub fn new(model: Model, max_tokens: u32, temperature: f64) -> Self {
        Self {
            model,
            max_tokens,
            temperature,
            system: None,
            tools: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_tools(mut self, tools: Vec<serde_json::Value>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_messages(mut self, messages: Vec<ApiMessage>) -> Self {
        self.messages = messages;
        self
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to an LLM provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Adapter name for logs and diagnostics (e.g. "anthropic").
    fn name(&self) -> &str;

    /// Send a chat request and return the assembled reply.
    async fn send(&self, request: ChatRequest) -> Result<LlmReply, GatewayError>;
}

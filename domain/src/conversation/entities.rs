//! Conversation entities: roles, content blocks, and messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Who authored a message.
///
/// Tool results are carried inside `User` messages (the transport treats a
/// tool result as user-provided input), so these two variants cover the
/// entire history. There is no system role; system text travels as a
/// separate top-level request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single block of message content.
///
/// Mirrors the transport's tagged representation, so a message serializes
/// directly into the wire shape:
///
/// ```json
/// {"type": "text", "text": "Checking the pods now."}
/// {"type": "tool_use", "id": "toolu_abc123", "name": "kubectl_get", "input": {"resource": "pods"}}
/// {"type": "tool_result", "tool_use_id": "toolu_abc123", "content": "NAME  READY  STATUS ..."}
/// ```
///
/// # Examples
///
/// ```
/// use steward_domain::conversation::ContentBlock;
///
/// let text = ContentBlock::text("Let me check that deployment.");
/// assert_eq!(text.as_text(), Some("Let me check that deployment."));
///
/// let result = ContentBlock::tool_result("toolu_1", "3 pods running");
/// assert!(result.is_tool_result());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A text block.
    Text { text: String },

    /// A tool invocation request from the model.
    ///
    /// The transport assigns `id`, enforces `name` against the provided
    /// tool definitions, and validates `input` against the JSON schema.
    ToolUse {
        id: String,
        name: String,
        input: HashMap<String, serde_json::Value>,
    },

    /// The outcome of a tool invocation, correlated back by `tool_use_id`.
    /// The content is already stringified by the caller.
    ToolResult {
        tool_use_id: String,
        content: String,
    },
}

impl ContentBlock {
    /// Create a text block.
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    /// Create a tool_result block.
    pub fn tool_result(tool_use_id: impl Into<String>, content: impl Into<String>) -> Self {
        ContentBlock::ToolResult {
            tool_use_id: tool_use_id.into(),
            content: content.into(),
        }
    }

    /// Returns the text content if this is a `Text` block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Returns `(id, name, input)` if this is a `ToolUse` block.
    pub fn as_tool_use(&self) -> Option<(&str, &str, &HashMap<String, serde_json::Value>)> {
        match self {
            ContentBlock::ToolUse { id, name, input } => Some((id, name, input)),
            _ => None,
        }
    }

    pub fn is_tool_use(&self) -> bool {
        matches!(self, ContentBlock::ToolUse { .. })
    }

    pub fn is_tool_result(&self) -> bool {
        matches!(self, ContentBlock::ToolResult { .. })
    }
}

/// A single message in the conversation history.
///
/// The timestamp is informational (summaries, exports); it never crosses
/// the transport boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: Vec<ContentBlock>,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// A user message with a single text block.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::text(text)],
            timestamp: Utc::now(),
        }
    }

    /// An assistant message carrying the model's content blocks verbatim.
    pub fn assistant(content: Vec<ContentBlock>) -> Self {
        Self {
            role: Role::Assistant,
            content,
            timestamp: Utc::now(),
        }
    }

    /// A user-role message carrying exactly one tool_result block.
    pub fn tool_result(tool_use_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::tool_result(tool_use_id, content)],
            timestamp: Utc::now(),
        }
    }

    /// Concatenate the text blocks of this message.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Render the message to readable text for exports: text blocks as-is,
    /// tool blocks summarized on their own lines.
    pub fn display_content(&self) -> String {
        self.content
            .iter()
            .map(|b| match b {
                ContentBlock::Text { text } => text.clone(),
                ContentBlock::ToolUse { name, .. } => format!("[tool_use: {}]", name),
                ContentBlock::ToolResult { tool_use_id, .. } => {
                    format!("[tool_result for {}]", tool_use_id)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The transport projection of a message: role and content only.
///
/// Produced by `ConversationManager::get_messages_for_api()`; this is the
/// exact shape serialized into the request body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiMessage {
    pub role: Role,
    pub content: Vec<ContentBlock>,
}

impl From<&Message> for ApiMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}

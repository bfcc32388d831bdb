//! Assembled model replies and stop reasons.

use serde::{Deserialize, Serialize};

use super::entities::ContentBlock;
use crate::tool::entities::ToolCall;

/// Reason the model stopped generating.
///
/// This drives the agentic loop: `ToolUse` means the requested tools must
/// be executed and their results sent back; everything else is terminal
/// for the current turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response.
    EndTurn,
    /// The model wants to call tools.
    ToolUse,
    /// Hit the token limit; the response may be truncated.
    MaxTokens,
    /// Provider-specific stop reason.
    Other(String),
}

impl StopReason {
    /// Parse the wire string, folding unknown values into `Other`.
    pub fn from_api(s: &str) -> Self {
        match s {
            "end_turn" => StopReason::EndTurn,
            "tool_use" => StopReason::ToolUse,
            "max_tokens" => StopReason::MaxTokens,
            other => StopReason::Other(other.to_string()),
        }
    }
}

/// A structured reply from the model: content blocks plus the stop reason.
///
/// # Helper Methods
///
/// - [`text_content()`](Self::text_content) — concatenate all text blocks
/// - [`tool_uses()`](Self::tool_uses) — extract tool_use blocks as [`ToolCall`]s,
///   in emission order
/// - [`has_tool_uses()`](Self::has_tool_uses) — quick check for tool use
/// - [`from_text()`](Self::from_text) — wrap a plain string
///
/// # Examples
///
/// ```
/// use steward_domain::conversation::{ContentBlock, LlmReply, StopReason};
///
/// let reply = LlmReply {
///     content: vec![
///         ContentBlock::text("Checking the node first."),
///         ContentBlock::ToolUse {
///             id: "toolu_1".to_string(),
///             name: "kubectl_get".to_string(),
///             input: [("resource".to_string(), serde_json::json!("nodes"))]
///                 .into_iter().collect(),
///         },
///     ],
///     stop_reason: Some(StopReason::ToolUse),
///     model: None,
/// };
/// assert!(reply.has_tool_uses());
/// assert_eq!(reply.tool_uses()[0].tool_name, "kubectl_get");
/// ```
#[derive(Debug, Clone)]
pub struct LlmReply {
    /// Content blocks in the reply (text and/or tool use).
    pub content: Vec<ContentBlock>,
    /// Why the model stopped generating, when the provider reported it.
    pub stop_reason: Option<StopReason>,
    /// Model identifier, when the provider returned one.
    pub model: Option<String>,
}

impl LlmReply {
    /// Create a text-only reply.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::text(text)],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        }
    }

    /// Concatenate all `Text` content blocks into a single string.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Text blocks joined with newlines, the final-answer rendering.
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Extract all `ToolUse` blocks as [`ToolCall`]s, preserving emission order.
    pub fn tool_uses(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse { id, name, input } => {
                    Some(ToolCall::from_tool_use(id, name, input.clone()))
                }
                _ => None,
            })
            .collect()
    }

    /// Returns `true` if the reply contains any tool use requests.
    pub fn has_tool_uses(&self) -> bool {
        self.content.iter().any(|b| b.is_tool_use())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_creates_text_only_reply() {
        let reply = LlmReply::from_text("All pods healthy.");
        assert_eq!(reply.text_content(), "All pods healthy.");
        assert!(!reply.has_tool_uses());
        assert!(reply.tool_uses().is_empty());
        assert_eq!(reply.stop_reason, Some(StopReason::EndTurn));
    }

    #[test]
    fn tool_use_extraction_preserves_order() {
        let reply = LlmReply {
            content: vec![
                ContentBlock::text("Two checks."),
                ContentBlock::ToolUse {
                    id: "toolu_a".to_string(),
                    name: "kubectl_get".to_string(),
                    input: [("resource".to_string(), serde_json::json!("pods"))]
                        .into_iter()
                        .collect(),
                },
                ContentBlock::ToolUse {
                    id: "toolu_b".to_string(),
                    name: "run_command".to_string(),
                    input: [("command".to_string(), serde_json::json!("uptime"))]
                        .into_iter()
                        .collect(),
                },
            ],
            stop_reason: Some(StopReason::ToolUse),
            model: Some("claude-sonnet-4.6".to_string()),
        };

        let calls = reply.tool_uses();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].id, "toolu_a");
        assert_eq!(calls[0].tool_name, "kubectl_get");
        assert_eq!(calls[1].id, "toolu_b");
        assert_eq!(calls[1].get_string("command"), Some("uptime"));
    }

    #[test]
    fn joined_text_uses_newlines() {
        let reply = LlmReply {
            content: vec![
                ContentBlock::text("First paragraph."),
                ContentBlock::text("Second paragraph."),
            ],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        };
        assert_eq!(reply.joined_text(), "First paragraph.\nSecond paragraph.");
        assert_eq!(reply.text_content(), "First paragraph.Second paragraph.");
    }

    #[test]
    fn empty_reply() {
        let reply = LlmReply {
            content: vec![],
            stop_reason: None,
            model: None,
        };
        assert_eq!(reply.text_content(), "");
        assert!(!reply.has_tool_uses());
    }

    #[test]
    fn stop_reason_from_api() {
        assert_eq!(StopReason::from_api("end_turn"), StopReason::EndTurn);
        assert_eq!(StopReason::from_api("tool_use"), StopReason::ToolUse);
        assert_eq!(StopReason::from_api("max_tokens"), StopReason::MaxTokens);
        assert_eq!(
            StopReason::from_api("stop_sequence"),
            StopReason::Other("stop_sequence".to_string())
        );
    }
}

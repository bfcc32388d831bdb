//! Bounded conversation history.
//!
//! [`ConversationManager`] owns one session's message history: an ordered
//! queue capped at `max_history` messages, trimmed from the front (oldest)
//! after every append.
//!
//! Trimming counts messages only. It does not know about
//! tool_use/tool_result pairing, so evicting an old assistant message can
//! orphan the tool_result that answered it. That is an accepted trade: the
//! transport rejects such a history rarely, and the orchestrator's
//! corruption recovery resets the session when it does.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

use super::entities::{ApiMessage, ContentBlock, Message, Role};

/// Default cap on retained messages.
pub const DEFAULT_MAX_HISTORY: usize = 20;

/// Ordered, bounded message history for one session.
#[derive(Debug, Clone)]
pub struct ConversationManager {
    messages: VecDeque<Message>,
    max_history: usize,
    session_started: DateTime<Utc>,
}

/// Counts and elapsed time for one session, for summaries and exports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationSummary {
    pub total_messages: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    pub session_duration_seconds: i64,
}

/// Snapshot of conversation shape taken before a reset, for operator display.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationDiagnostics {
    pub tool_use_blocks: usize,
    pub tool_result_blocks: usize,
    pub role_sequence: Vec<Role>,
}

impl ConversationManager {
    /// Create a manager retaining at most `max_history` messages.
    ///
    /// A cap of 0 is clamped to 1 so the latest message always survives.
    pub fn new(max_history: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            max_history: max_history.max(1),
            session_started: Utc::now(),
        }
    }

    /// Append a user message with a single text block.
    pub fn add_user_message(&mut self, text: impl Into<String>) {
        self.push(Message::user(text));
    }

    /// Append the model's content blocks verbatim as an assistant message.
    ///
    /// Text and tool_use interleaving is preserved exactly as emitted.
    pub fn add_assistant_message(&mut self, content: Vec<ContentBlock>) {
        self.push(Message::assistant(content));
    }

    /// Append a tool result as a user-role message with one tool_result
    /// block. The result text is already stringified (and sanitized) by
    /// the caller.
    pub fn add_tool_result(&mut self, tool_use_id: impl Into<String>, content: impl Into<String>) {
        self.push(Message::tool_result(tool_use_id, content));
    }

    fn push(&mut self, message: Message) {
        self.messages.push_back(message);
        while self.messages.len() > self.max_history {
            self.messages.pop_front();
        }
    }

    /// The transport projection: retained messages as `(role, content)`
    /// pairs in order. Pure read; timestamps and local metadata stay behind.
    pub fn get_messages_for_api(&self) -> Vec<ApiMessage> {
        self.messages.iter().map(ApiMessage::from).collect()
    }

    /// Drop all messages and restart the session clock.
    pub fn clear_history(&mut self) {
        self.messages.clear();
        self.session_started = Utc::now();
    }

    /// Message counts and elapsed session time.
    pub fn summary(&self) -> ConversationSummary {
        let user_messages = self
            .messages
            .iter()
            .filter(|m| m.role == Role::User)
            .count();
        ConversationSummary {
            total_messages: self.messages.len(),
            user_messages,
            assistant_messages: self.messages.len() - user_messages,
            session_duration_seconds: (Utc::now() - self.session_started).num_seconds(),
        }
    }

    /// Shape snapshot for reset diagnostics: block counts and role sequence.
    pub fn diagnostics(&self) -> ConversationDiagnostics {
        let mut tool_use_blocks = 0;
        let mut tool_result_blocks = 0;
        for message in &self.messages {
            for block in &message.content {
                if block.is_tool_use() {
                    tool_use_blocks += 1;
                } else if block.is_tool_result() {
                    tool_result_blocks += 1;
                }
            }
        }
        ConversationDiagnostics {
            tool_use_blocks,
            tool_result_blocks,
            role_sequence: self.messages.iter().map(|m| m.role).collect(),
        }
    }

    /// The text of the most recent user message that is not a tool result,
    /// if any. Used by corruption recovery to salvage the user's request.
    pub fn last_user_text(&self) -> Option<String> {
        self.messages
            .iter()
            .rev()
            .filter(|m| m.role == Role::User)
            .find(|m| m.content.iter().any(|b| b.as_text().is_some()))
            .map(|m| m.text_content())
    }

    /// Iterate the retained messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }
}

impl Default for ConversationManager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_never_exceeds_cap() {
        let mut manager = ConversationManager::new(3);
        for i in 0..10 {
            manager.add_user_message(format!("message {}", i));
        }
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn trim_keeps_most_recent_in_order() {
        let mut manager = ConversationManager::new(2);
        manager.add_user_message("first");
        manager.add_user_message("second");
        manager.add_user_message("third");

        let api = manager.get_messages_for_api();
        assert_eq!(api.len(), 2);
        assert_eq!(api[0].content[0].as_text(), Some("second"));
        assert_eq!(api[1].content[0].as_text(), Some("third"));
    }

    #[test]
    fn zero_cap_clamped_to_one() {
        let mut manager = ConversationManager::new(0);
        manager.add_user_message("only");
        manager.add_user_message("latest");
        assert_eq!(manager.len(), 1);
        assert_eq!(
            manager.get_messages_for_api()[0].content[0].as_text(),
            Some("latest")
        );
    }

    #[test]
    fn assistant_blocks_kept_verbatim() {
        let mut manager = ConversationManager::default();
        let blocks = vec![
            ContentBlock::text("Running a check."),
            ContentBlock::ToolUse {
                id: "toolu_1".to_string(),
                name: "run_command".to_string(),
                input: std::collections::HashMap::new(),
            },
            ContentBlock::text("Back soon."),
        ];
        manager.add_assistant_message(blocks.clone());

        let api = manager.get_messages_for_api();
        assert_eq!(api[0].role, Role::Assistant);
        assert_eq!(api[0].content, blocks);
    }

    #[test]
    fn tool_result_is_user_role() {
        let mut manager = ConversationManager::default();
        manager.add_tool_result("toolu_1", "exit code 0");

        let api = manager.get_messages_for_api();
        assert_eq!(api[0].role, Role::User);
        assert_eq!(api[0].content.len(), 1);
        assert!(api[0].content[0].is_tool_result());
    }

    #[test]
    fn clear_resets_messages() {
        let mut manager = ConversationManager::default();
        manager.add_user_message("hello");
        manager.add_assistant_message(vec![ContentBlock::text("hi")]);
        assert_eq!(manager.len(), 2);

        manager.clear_history();
        assert!(manager.is_empty());
        assert_eq!(manager.summary().total_messages, 0);
    }

    #[test]
    fn summary_counts_by_role() {
        let mut manager = ConversationManager::default();
        manager.add_user_message("question");
        manager.add_assistant_message(vec![ContentBlock::text("answer")]);
        // Tool results count as user messages; they carry the user role.
        manager.add_tool_result("toolu_1", "output");

        let summary = manager.summary();
        assert_eq!(summary.total_messages, 3);
        assert_eq!(summary.user_messages, 2);
        assert_eq!(summary.assistant_messages, 1);
        assert!(summary.session_duration_seconds >= 0);
    }

    #[test]
    fn diagnostics_counts_blocks() {
        let mut manager = ConversationManager::default();
        manager.add_user_message("restart the api");
        manager.add_assistant_message(vec![
            ContentBlock::text("On it."),
            ContentBlock::ToolUse {
                id: "toolu_1".to_string(),
                name: "kubectl_rollout_restart".to_string(),
                input: std::collections::HashMap::new(),
            },
        ]);
        manager.add_tool_result("toolu_1", "restarted");

        let diag = manager.diagnostics();
        assert_eq!(diag.tool_use_blocks, 1);
        assert_eq!(diag.tool_result_blocks, 1);
        assert_eq!(
            diag.role_sequence,
            vec![Role::User, Role::Assistant, Role::User]
        );
    }

    #[test]
    fn last_user_text_skips_tool_results() {
        let mut manager = ConversationManager::default();
        manager.add_user_message("scale the frontend");
        manager.add_assistant_message(vec![ContentBlock::text("Scaling.")]);
        manager.add_tool_result("toolu_1", "scaled to 3");

        assert_eq!(
            manager.last_user_text(),
            Some("scale the frontend".to_string())
        );
    }

    #[test]
    fn trim_can_split_tool_pairs() {
        // Documented behavior: trimming is pairing-blind. With a cap of 2,
        // the assistant's tool_use is evicted while its tool_result stays.
        let mut manager = ConversationManager::new(2);
        manager.add_assistant_message(vec![ContentBlock::ToolUse {
            id: "toolu_1".to_string(),
            name: "run_command".to_string(),
            input: std::collections::HashMap::new(),
        }]);
        manager.add_tool_result("toolu_1", "done");
        manager.add_user_message("thanks");

        let api = manager.get_messages_for_api();
        assert_eq!(api.len(), 2);
        assert!(api[0].content[0].is_tool_result());
        assert_eq!(manager.diagnostics().tool_use_blocks, 0);
    }
}

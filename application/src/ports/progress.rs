//! Progress notification port
//!
//! Defines the interface for reporting progress during an agent turn.

/// Callback for progress updates while the orchestrator works a turn.
///
/// Implementations live in the presentation layer and can display progress
/// in various ways (spinner, plain console, silent). All methods default to
/// no-ops so implementations only override what they render.
pub trait ProgressNotifier: Send + Sync {
    /// Called before each LLM request.
    fn on_request_start(&self, _model: &str) {}

    /// Called when the LLM response has been received.
    fn on_request_end(&self) {}

    /// Called with the assistant's text for an iteration, if any.
    fn on_assistant_text(&self, _text: &str) {}

    /// Called before a tool executes.
    fn on_tool_start(&self, _tool_name: &str, _args_preview: &str) {}

    /// Called when a tool execution finishes.
    fn on_tool_finish(&self, _tool_name: &str, _success: bool, _duration_ms: u64) {}

    /// Called when the safety validator refuses a tool call.
    fn on_tool_blocked(&self, _tool_name: &str, _reason: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {}

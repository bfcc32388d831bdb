//! Application-level configuration.
//!
//! [`AgentParams`] gathers every knob the orchestrator loop consults. The
//! infrastructure layer builds one from the `[agent]` section of the config
//! file; tests build one directly with the builder methods.

use std::time::Duration;
use steward_domain::Model;
use steward_domain::conversation::DEFAULT_MAX_HISTORY;

/// Parameters governing one agent loop.
#[derive(Debug, Clone)]
pub struct AgentParams {
    /// Model requested for every gateway call.
    pub model: Model,
    /// Iteration budget per user message; the only built-in way the
    /// loop ends without the model ending its turn.
    pub max_iterations: usize,
    /// Max tokens per model response.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Conversation history cap in messages.
    pub max_history: usize,
    /// Pause between sequential tool executions.
    pub tool_delay: Duration,
    /// Tool output truncation threshold in characters.
    pub sanitize_max_length: usize,
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_iterations: 50,
            max_tokens: 4096,
            temperature: 0.7,
            max_history: DEFAULT_MAX_HISTORY,
            tool_delay: Duration::from_millis(500),
            sanitize_max_length: 10_000,
        }
    }
}

impl AgentParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tool_delay(mut self, tool_delay: Duration) -> Self {
        self.tool_delay = tool_delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = AgentParams::default();
        assert_eq!(params.max_iterations, 50);
        assert_eq!(params.max_history, DEFAULT_MAX_HISTORY);
        assert_eq!(params.tool_delay, Duration::from_millis(500));
        assert_eq!(params.sanitize_max_length, 10_000);
    }

    #[test]
    fn builders_override_fields() {
        let params = AgentParams::default()
            .with_model(Model::ClaudeHaiku45)
            .with_max_iterations(3)
            .with_tool_delay(Duration::ZERO);
        assert_eq!(params.model, Model::ClaudeHaiku45);
        assert_eq!(params.max_iterations, 3);
        assert!(params.tool_delay.is_zero());
    }
}

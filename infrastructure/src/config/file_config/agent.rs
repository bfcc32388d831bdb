//! Agent configuration from TOML (`[agent]` section)

use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use std::time::Duration;
use steward_application::AgentParams;
use steward_domain::Model;

use serde::{Deserialize, Serialize};

/// Raw agent configuration from TOML.
///
/// # Example
///
/// ```toml
/// [agent]
/// model = "claude-sonnet-4.6"
/// max_iterations = 50
/// max_tokens = 4096
/// temperature = 0.7
/// max_history = 20
/// tool_delay_ms = 500
/// sanitize_max_length = 10000
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Model name. Unknown names pass through as custom model ids.
    pub model: Option<String>,
    /// Loop iteration budget per user message.
    pub max_iterations: usize,
    /// Max tokens per model response.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Conversation history cap in messages.
    pub max_history: usize,
    /// Delay between sequential tool executions, in milliseconds.
    pub tool_delay_ms: u64,
    /// Tool output truncation threshold in characters.
    pub sanitize_max_length: usize,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        let params = AgentParams::default();
        Self {
            model: None,
            max_iterations: params.max_iterations,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            max_history: params.max_history,
            tool_delay_ms: params.tool_delay.as_millis() as u64,
            sanitize_max_length: params.sanitize_max_length,
        }
    }
}

impl FileAgentConfig {
    /// Parse the model name, warning on an empty string.
    pub fn parse_model(&self) -> (Model, Vec<ConfigIssue>) {
        match self.model.as_deref() {
            None => (Model::default(), vec![]),
            Some("") => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::EmptyModelName {
                        field: "agent.model".to_string(),
                    },
                    format!(
                        "agent.model is empty, falling back to '{}'",
                        Model::default()
                    ),
                );
                (Model::default(), vec![issue])
            }
            // Model parsing is infallible: unknown names become Custom ids.
            Some(name) => (name.parse().unwrap_or_default(), vec![]),
        }
    }

    /// Convert into orchestrator parameters.
    pub fn to_agent_params(&self) -> AgentParams {
        AgentParams {
            model: self.parse_model().0,
            max_iterations: self.max_iterations,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            max_history: self.max_history,
            tool_delay: Duration::from_millis(self.tool_delay_ms),
            sanitize_max_length: self.sanitize_max_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_agent_params() {
        let config = FileAgentConfig::default();
        let params = AgentParams::default();
        assert_eq!(config.max_iterations, params.max_iterations);
        assert_eq!(config.max_history, params.max_history);
        assert_eq!(config.tool_delay_ms, 500);
        assert!(config.model.is_none());
    }

    #[test]
    fn parse_model_known_name() {
        let config = FileAgentConfig {
            model: Some("claude-haiku-4.5".to_string()),
            ..Default::default()
        };
        let (model, issues) = config.parse_model();
        assert_eq!(model, Model::ClaudeHaiku45);
        assert!(issues.is_empty());
    }

    #[test]
    fn parse_model_unknown_name_is_custom() {
        let config = FileAgentConfig {
            model: Some("my-tuned-model".to_string()),
            ..Default::default()
        };
        let (model, issues) = config.parse_model();
        assert_eq!(model, Model::Custom("my-tuned-model".to_string()));
        assert!(issues.is_empty());
    }

    #[test]
    fn parse_model_empty_warns_and_falls_back() {
        let config = FileAgentConfig {
            model: Some(String::new()),
            ..Default::default()
        };
        let (model, issues) = config.parse_model();
        assert_eq!(model, Model::default());
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::EmptyModelName { field } if field == "agent.model"
        ));
    }

    #[test]
    fn to_agent_params_carries_every_field() {
        let config = FileAgentConfig {
            model: Some("claude-opus-4.6".to_string()),
            max_iterations: 10,
            max_tokens: 2048,
            temperature: 0.2,
            max_history: 8,
            tool_delay_ms: 100,
            sanitize_max_length: 5000,
        };
        let params = config.to_agent_params();
        assert_eq!(params.model, Model::ClaudeOpus46);
        assert_eq!(params.max_iterations, 10);
        assert_eq!(params.max_tokens, 2048);
        assert_eq!(params.tool_delay, Duration::from_millis(100));
        assert_eq!(params.sanitize_max_length, 5000);
    }
}

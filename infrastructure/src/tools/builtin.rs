//! Builtin tool provider: shell command and file operations.
//!
//! Every `run_command` call passes through the safety validator before a
//! process is spawned; a blocked verdict becomes a BLOCKED failure result
//! without ever reaching the shell.

use async_trait::async_trait;
use steward_domain::safety::SafetyValidator;
use steward_domain::tool::{
    entities::{ToolCall, ToolDefinition},
    provider::{ProviderError, ToolProvider},
    value_objects::{ToolError, ToolResult},
};
use tracing::warn;

use super::command::{self, RUN_COMMAND};
use super::file::{self, READ_FILE, WRITE_FILE};

/// Registration priority for the builtin provider
pub const BUILTIN_PRIORITY: i32 = 10;

/// Provider for the always-available builtin tools.
pub struct BuiltinToolProvider {
    validator: SafetyValidator,
    working_dir: Option<String>,
}

impl BuiltinToolProvider {
    pub fn new(validator: SafetyValidator) -> Self {
        Self {
            validator,
            working_dir: None,
        }
    }

    /// Set a default working directory for commands that do not name one.
    pub fn with_working_dir(mut self, dir: impl Into<String>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn execute_command(&self, call: &ToolCall) -> ToolResult {
        if let Some(command_str) = call.get_string("command") {
            let verdict = self.validator.validate_command(command_str);
            if !verdict.is_safe {
                warn!(
                    command = command_str,
                    reason = %verdict.reason,
                    "Command blocked by safety policy"
                );
                return ToolResult::failure(
                    RUN_COMMAND,
                    ToolError::blocked(verdict.reason.clone()),
                );
            }
        }

        if let Some(dir) = &self.working_dir
            && call.get_string("working_dir").is_none()
        {
            let call = call.clone().with_arg("working_dir", dir.as_str());
            return command::execute_run_command(&call);
        }

        command::execute_run_command(call)
    }
}

#[async_trait]
impl ToolProvider for BuiltinToolProvider {
    fn id(&self) -> &str {
        "builtin"
    }

    fn display_name(&self) -> &str {
        "Builtin Tools"
    }

    fn priority(&self) -> i32 {
        BUILTIN_PRIORITY
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn discover_tools(&self) -> Result<Vec<ToolDefinition>, ProviderError> {
        Ok(vec![
            command::run_command_definition(),
            file::read_file_definition(),
            file::write_file_definition(),
        ])
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        match call.tool_name.as_str() {
            RUN_COMMAND => self.execute_command(call),
            READ_FILE => file::execute_read_file(call),
            WRITE_FILE => file::execute_write_file(call),
            other => ToolResult::failure(other, ToolError::unknown_tool(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steward_domain::safety::SafetyPolicy;

    fn provider() -> BuiltinToolProvider {
        BuiltinToolProvider::new(SafetyValidator::new(SafetyPolicy::default()))
    }

    #[tokio::test]
    async fn test_discovers_three_tools() {
        let tools = provider().discover_tools().await.unwrap();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(tools.len(), 3);
        assert!(names.contains(&RUN_COMMAND));
        assert!(names.contains(&READ_FILE));
        assert!(names.contains(&WRITE_FILE));
    }

    #[tokio::test]
    async fn test_executes_safe_command() {
        let call = ToolCall::new(RUN_COMMAND).with_arg("command", "echo builtin");
        let result = provider().execute(&call).await;

        assert!(result.is_success());
        assert!(result.output().unwrap().contains("builtin"));
    }

    #[tokio::test]
    async fn test_blocks_destructive_command() {
        let call = ToolCall::new(RUN_COMMAND).with_arg("command", "rm -rf /");
        let result = provider().execute(&call).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "BLOCKED");
        assert!(result.error().unwrap().message.contains("safety policy"));
    }

    #[tokio::test]
    async fn test_blocks_operator_substring() {
        let validator = SafetyValidator::new(
            SafetyPolicy::default().with_dangerous_substrings(vec!["forbidden".to_string()]),
        );
        let provider = BuiltinToolProvider::new(validator);

        let call = ToolCall::new(RUN_COMMAND).with_arg("command", "echo forbidden");
        let result = provider.execute(&call).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "BLOCKED");
    }

    #[tokio::test]
    async fn test_default_working_dir_injected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let provider = provider().with_working_dir(temp_dir.path().to_str().unwrap());

        let call = ToolCall::new(RUN_COMMAND).with_arg("command", "pwd");
        let result = provider.execute(&call).await;

        assert!(result.is_success());
        let expected = temp_dir.path().file_name().unwrap().to_str().unwrap();
        assert!(result.output().unwrap().contains(expected));
    }

    #[tokio::test]
    async fn test_explicit_working_dir_wins_over_default() {
        let default_dir = tempfile::tempdir().unwrap();
        let explicit_dir = tempfile::tempdir().unwrap();
        let provider = provider().with_working_dir(default_dir.path().to_str().unwrap());

        let call = ToolCall::new(RUN_COMMAND)
            .with_arg("command", "pwd")
            .with_arg("working_dir", explicit_dir.path().to_str().unwrap());
        let result = provider.execute(&call).await;

        assert!(result.is_success());
        let expected = explicit_dir.path().file_name().unwrap().to_str().unwrap();
        assert!(result.output().unwrap().contains(expected));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let call = ToolCall::new("no_such_tool");
        let result = provider().execute(&call).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
        assert!(result.error().unwrap().message.contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_file_tools_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");

        let write = ToolCall::new(WRITE_FILE)
            .with_arg("path", path.to_str().unwrap())
            .with_arg("content", "dispatched");
        assert!(provider().execute(&write).await.is_success());

        let read = ToolCall::new(READ_FILE).with_arg("path", path.to_str().unwrap());
        let result = provider().execute(&read).await;
        assert_eq!(result.output(), Some("dispatched"));
    }
}

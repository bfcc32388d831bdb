//! Git tool provider: read-oriented wrappers over the `git` binary.

use async_trait::async_trait;
use std::path::Path;
use steward_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    provider::{ProviderError, ToolProvider},
    value_objects::{ToolError, ToolResult},
};

use super::cli::{cap_lines, is_command_available, run_cli};

/// Registration priority for the git provider
pub const GIT_PRIORITY: i32 = 40;

/// Tool name constants
pub const GIT_STATUS: &str = "git_status";
pub const GIT_LOG: &str = "git_log";
pub const GIT_DIFF: &str = "git_diff";

/// Default and maximum commit counts for git_log
const DEFAULT_LOG_COUNT: i64 = 10;
const MAX_LOG_COUNT: i64 = 100;

/// Maximum lines returned to the conversation from any git call
const MAX_OUTPUT_LINES: usize = 500;

/// Provider wrapping the `git` binary.
pub struct GitToolProvider;

impl GitToolProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GitToolProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolProvider for GitToolProvider {
    fn id(&self) -> &str {
        "git"
    }

    fn display_name(&self) -> &str {
        "Git"
    }

    fn priority(&self) -> i32 {
        GIT_PRIORITY
    }

    async fn is_available(&self) -> bool {
        is_command_available("git")
    }

    async fn discover_tools(&self) -> Result<Vec<ToolDefinition>, ProviderError> {
        if !self.is_available().await {
            return Err(ProviderError::NotAvailable(
                "git is not installed or not on PATH".to_string(),
            ));
        }
        Ok(definitions())
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let args = match build_args(call) {
            Ok(Some(args)) => args,
            Ok(None) => {
                return ToolResult::failure(
                    &call.tool_name,
                    ToolError::unknown_tool(&call.tool_name),
                );
            }
            Err(message) => {
                return ToolResult::failure(&call.tool_name, ToolError::invalid_argument(message));
            }
        };

        cap_output(run_cli(&call.tool_name, "git", &args))
    }
}

fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(GIT_STATUS, "Show the working tree status of a repository.")
            .with_parameter(ToolParameter::new(
                "repo_path",
                "Repository path (default: current directory)",
                false,
            )),
        ToolDefinition::new(GIT_LOG, "Show recent commits, one line each.")
            .with_parameter(ToolParameter::new(
                "repo_path",
                "Repository path (default: current directory)",
                false,
            ))
            .with_parameter(
                ToolParameter::new("count", "Number of commits to show (default: 10)", false)
                    .with_type("number"),
            ),
        ToolDefinition::new(GIT_DIFF, "Show uncommitted changes.")
            .with_parameter(ToolParameter::new(
                "repo_path",
                "Repository path (default: current directory)",
                false,
            ))
            .with_parameter(
                ToolParameter::new("staged", "Diff the index instead of the worktree", false)
                    .with_type("boolean"),
            )
            .with_parameter(ToolParameter::new(
                "path",
                "Limit the diff to one file or directory",
                false,
            )),
    ]
}

fn build_args(call: &ToolCall) -> Result<Option<Vec<String>>, String> {
    let mut args = Vec::new();
    if let Some(repo) = call.get_string("repo_path") {
        if !Path::new(repo).is_dir() {
            return Err(format!("Repository path is not a directory: {}", repo));
        }
        args.push("-C".to_string());
        args.push(repo.to_string());
    }

    match call.tool_name.as_str() {
        GIT_STATUS => {
            args.push("status".to_string());
        }
        GIT_LOG => {
            let count = call
                .get_i64("count")
                .unwrap_or(DEFAULT_LOG_COUNT)
                .clamp(1, MAX_LOG_COUNT);
            args.push("log".to_string());
            args.push("--oneline".to_string());
            args.push("-n".to_string());
            args.push(count.to_string());
        }
        GIT_DIFF => {
            args.push("diff".to_string());
            if call.get_bool("staged").unwrap_or(false) {
                args.push("--staged".to_string());
            }
            if let Some(path) = call.get_string("path") {
                // `--` keeps a path argument from being read as a flag or ref
                args.push("--".to_string());
                args.push(path.to_string());
            }
        }
        _ => return Ok(None),
    }

    Ok(Some(args))
}

fn cap_output(mut result: ToolResult) -> ToolResult {
    if let Some(output) = result.output.take() {
        result.output = Some(cap_lines(&output, MAX_OUTPUT_LINES));
    }
    result
}

//! Shared plumbing for CLI-wrapper providers (kubectl, git).

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use steward_domain::tool::value_objects::{ToolError, ToolResult, ToolResultMetadata};

use super::command::{WaitError, combine_output, wait_with_timeout};

/// Timeout applied to wrapped CLI invocations
pub(crate) const CLI_TIMEOUT_SECS: u64 = 60;

/// Check that a binary is on PATH.
pub(crate) fn is_command_available(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Run a program with arguments and wrap the outcome as a tool result.
///
/// Unlike raw `run_command`, a non-zero exit here is a tool failure: the
/// argument vector was built by us, so a failing invocation means the
/// operation itself failed and stderr explains why.
pub(crate) fn run_cli(tool_name: &str, program: &str, args: &[String]) -> ToolResult {
    let start = Instant::now();

    let child = match Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(c) => c,
        Err(e) => {
            return ToolResult::failure(
                tool_name,
                ToolError::execution_failed(format!("Failed to spawn {}: {}", program, e)),
            );
        }
    };

    let output = match wait_with_timeout(child, Duration::from_secs(CLI_TIMEOUT_SECS)) {
        Ok(o) => o,
        Err(WaitError::TimedOut) => {
            return ToolResult::failure(
                tool_name,
                ToolError::timeout(format!(
                    "{} exceeded {} second limit",
                    program, CLI_TIMEOUT_SECS
                )),
            );
        }
        Err(WaitError::Io(e)) => {
            return ToolResult::failure(
                tool_name,
                ToolError::execution_failed(format!("Failed to wait for {}: {}", program, e)),
            );
        }
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    let exit_code = output.status.code().unwrap_or(-1);
    let metadata = ToolResultMetadata {
        duration_ms: Some(duration_ms),
        exit_code: Some(exit_code),
        ..Default::default()
    };

    if output.status.success() {
        ToolResult::success(tool_name, combine_output(&output.stdout, &output.stderr))
            .with_metadata(metadata)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr.trim();
        let error = if detail.is_empty() {
            ToolError::execution_failed(format!("{} exited with code {}", program, exit_code))
        } else {
            ToolError::execution_failed(format!("{} exited with code {}", program, exit_code))
                .with_details(cap_lines(detail, 20))
        };
        ToolResult::failure(tool_name, error).with_metadata(metadata)
    }
}

/// Keep at most `max_lines` lines, appending a truncation marker.
pub(crate) fn cap_lines(text: &str, max_lines: usize) -> String {
    let total = text.lines().count();
    if total <= max_lines {
        return text.to_string();
    }
    let kept: Vec<&str> = text.lines().take(max_lines).collect();
    format!(
        "{}\n... (truncated, {} of {} lines shown)",
        kept.join("\n"),
        max_lines,
        total
    )
}

//! Command execution tool: run_command

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use steward_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};

/// Tool name constant
pub const RUN_COMMAND: &str = "run_command";

/// Default timeout for command execution (60 seconds)
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Maximum output size (1 MB)
const MAX_OUTPUT_SIZE: usize = 1024 * 1024;

/// Get the tool definition for run_command
pub fn run_command_definition() -> ToolDefinition {
    ToolDefinition::new(
        RUN_COMMAND,
        "Execute a shell command and return its combined stdout/stderr. \
         Commands are checked against the safety policy before running.",
    )
    .with_parameter(ToolParameter::new("command", "The command to execute", true))
    .with_parameter(ToolParameter::new(
        "working_dir",
        "Working directory for the command",
        false,
    ))
    .with_parameter(
        ToolParameter::new("timeout_secs", "Timeout in seconds (default: 60)", false)
            .with_type("number"),
    )
}

/// Execute the run_command tool.
///
/// Safety classification happens in the provider before this runs; this
/// function only spawns and collects.
pub fn execute_run_command(call: &ToolCall) -> ToolResult {
    let start = Instant::now();

    let command_str = match call.require_string("command") {
        Ok(c) => c,
        Err(e) => return ToolResult::failure(RUN_COMMAND, ToolError::invalid_argument(e)),
    };

    let timeout_secs = call
        .get_i64("timeout_secs")
        .unwrap_or(DEFAULT_TIMEOUT_SECS as i64) as u64;

    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", command_str]);
        c
    } else {
        let mut c = Command::new("sh");
        c.args(["-c", command_str]);
        c
    };

    if let Some(dir) = call.get_string("working_dir") {
        let path = std::path::Path::new(dir);
        if !path.exists() {
            return ToolResult::failure(
                RUN_COMMAND,
                ToolError::new(
                    "NOT_FOUND",
                    format!("Working directory does not exist: {}", dir),
                ),
            );
        }
        if !path.is_dir() {
            return ToolResult::failure(
                RUN_COMMAND,
                ToolError::invalid_argument(format!("'{}' is not a directory", dir)),
            );
        }
        cmd.current_dir(path);
    }

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let child = match cmd.spawn() {
        Ok(c) => c,
        Err(e) => {
            return ToolResult::failure(
                RUN_COMMAND,
                ToolError::execution_failed(format!("Failed to spawn command: {}", e)),
            );
        }
    };

    let output = match wait_with_timeout(child, Duration::from_secs(timeout_secs)) {
        Ok(o) => o,
        Err(WaitError::TimedOut) => {
            return ToolResult::failure(
                RUN_COMMAND,
                ToolError::timeout(format!("command exceeded {} second limit", timeout_secs)),
            );
        }
        Err(WaitError::Io(e)) => {
            return ToolResult::failure(
                RUN_COMMAND,
                ToolError::execution_failed(format!("Failed to wait for process: {}", e)),
            );
        }
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    let exit_code = output.status.code().unwrap_or(-1);

    let combined_output = combine_output(&output.stdout, &output.stderr);
    let bytes = combined_output.len();

    let metadata = ToolResultMetadata {
        duration_ms: Some(duration_ms),
        bytes: Some(bytes),
        exit_code: Some(exit_code),
        ..Default::default()
    };

    // A non-zero exit is still a tool-level success: the model decides
    // what a failed command means for the task.
    if output.status.success() {
        ToolResult::success(RUN_COMMAND, combined_output).with_metadata(metadata)
    } else {
        ToolResult::success(
            RUN_COMMAND,
            format!("Command exited with code {}\n{}", exit_code, combined_output),
        )
        .with_metadata(metadata)
    }
}

/// Merge stdout and stderr into one capped string.
pub(crate) fn combine_output(stdout: &[u8], stderr: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    let stderr = String::from_utf8_lossy(stderr);

    let mut combined = String::new();
    if !stdout.is_empty() {
        combined.push_str(&stdout);
    }
    if !stderr.is_empty() {
        if !combined.is_empty() {
            combined.push_str("\n--- stderr ---\n");
        }
        combined.push_str(&stderr);
    }

    if combined.len() > MAX_OUTPUT_SIZE {
        combined.truncate(MAX_OUTPUT_SIZE);
        combined.push_str("\n... (output truncated)");
    }

    combined
}

pub(crate) enum WaitError {
    TimedOut,
    Io(String),
}

/// Wait for a child process with timeout, polling `try_wait`.
pub(crate) fn wait_with_timeout(
    mut child: std::process::Child,
    timeout: Duration,
) -> Result<std::process::Output, WaitError> {
    let start = Instant::now();

    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                let stdout = child
                    .stdout
                    .take()
                    .map(|mut s| {
                        let mut buf = Vec::new();
                        std::io::Read::read_to_end(&mut s, &mut buf).ok();
                        buf
                    })
                    .unwrap_or_default();

                let stderr = child
                    .stderr
                    .take()
                    .map(|mut s| {
                        let mut buf = Vec::new();
                        std::io::Read::read_to_end(&mut s, &mut buf).ok();
                        buf
                    })
                    .unwrap_or_default();

                return Ok(std::process::Output {
                    status,
                    stdout,
                    stderr,
                });
            }
            Ok(None) => {
                if start.elapsed() > timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(WaitError::TimedOut);
                }
                std::thread::sleep(Duration::from_millis(100));
            }
            Err(e) => {
                return Err(WaitError::Io(e.to_string()));
            }
        }
    }
}

//! Tool value objects: immutable result and error types
//!
//! Every tool execution produces a [`ToolResult`] with optional
//! [`ToolResultMetadata`] (timing, byte counts, exit codes). Results are
//! never retried automatically; many of the operations this agent guards
//! are non-idempotent, so retry-or-not belongs to the handler or the
//! human, not the loop.

use serde::{Deserialize, Serialize};

/// Error that occurred during tool execution.
///
/// Codes are diagnostic labels for rendering and logs:
///
/// | Code | Meaning |
/// |------|---------|
/// | `INVALID_ARGUMENT` | Missing or malformed parameters |
/// | `NOT_FOUND` | Unknown tool, missing file or directory |
/// | `EXECUTION_FAILED` | Runtime failure (I/O error, spawn failure) |
/// | `PERMISSION_DENIED` | Access denied |
/// | `TIMEOUT` | The handler's own time budget ran out |
/// | `BLOCKED` | Refused by the safety validator |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND", "BLOCKED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Common error constructors
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            "NOT_FOUND",
            format!("Resource not found: {}", resource.into()),
        )
    }

    /// The model asked for a tool name absent from the registry.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", format!("Unknown tool: {}", name.into()))
    }

    pub fn permission_denied(resource: impl Into<String>) -> Self {
        Self::new(
            "PERMISSION_DENIED",
            format!("Permission denied: {}", resource.into()),
        )
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }

    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::new(
            "TIMEOUT",
            format!("Operation timed out: {}", operation.into()),
        )
    }

    pub fn blocked(reason: impl Into<String>) -> Self {
        Self::new(
            "BLOCKED",
            format!("Blocked by safety policy: {}", reason.into()),
        )
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ToolError {}

/// Result of a tool execution, carrying output or error information.
///
/// Produced by tool providers and consumed by the agent loop, which
/// stringifies it via [`to_block_text`](Self::to_block_text), sanitizes
/// the text, and threads it back into the conversation as a tool_result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the execution was successful
    pub success: bool,
    /// Output content (for successful execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Metadata about the execution
    #[serde(default)]
    pub metadata: ToolResultMetadata,
}

/// Structured metadata about tool execution.
///
/// Each tool populates the relevant fields:
///
/// | Tool | `duration_ms` | `bytes` | `path` | `exit_code` |
/// |------|:---:|:---:|:---:|:---:|
/// | `run_command` | yes | - | - | yes |
/// | `read_file` | - | yes | yes | - |
/// | `write_file` | - | yes | yes | - |
/// | `kubectl_*` / `git_*` | yes | - | - | yes |
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    /// Duration of execution in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Number of bytes processed/returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// For file operations: the affected path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// For command execution: exit code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: true,
            output: Some(output.into()),
            error: None,
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error),
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Add metadata to the result
    pub fn with_metadata(mut self, metadata: ToolResultMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Add duration metadata
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    /// Add path metadata
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.metadata.path = Some(path.into());
        self
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the output content
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Get the error
    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Stringify for the conversation. Success carries the raw output;
    /// failure becomes a compact JSON object the model can parse and
    /// explain in natural language.
    pub fn to_block_text(&self) -> String {
        if self.success {
            self.output.clone().unwrap_or_default()
        } else {
            let error_text = self
                .error
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown error".to_string());
            serde_json::json!({
                "success": false,
                "error": error_text,
            })
            .to_string()
        }
    }
}

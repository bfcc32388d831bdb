//! File operation tools: read_file, write_file

use std::path::Path;
use steward_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};

/// Tool name constants
pub const READ_FILE: &str = "read_file";
pub const WRITE_FILE: &str = "write_file";

/// Maximum file size to read (10 MB)
const MAX_READ_SIZE: u64 = 10 * 1024 * 1024;

/// Get the tool definition for read_file
pub fn read_file_definition() -> ToolDefinition {
    ToolDefinition::new(READ_FILE, "Read the contents of a file from disk.")
        .with_parameter(ToolParameter::new("path", "Path to the file to read", true))
        .with_parameter(
            ToolParameter::new("offset", "Line number to start reading from (0-based)", false)
                .with_type("number"),
        )
        .with_parameter(
            ToolParameter::new("limit", "Maximum number of lines to read", false)
                .with_type("number"),
        )
}

/// Get the tool definition for write_file
pub fn write_file_definition() -> ToolDefinition {
    ToolDefinition::new(
        WRITE_FILE,
        "Write content to a file, replacing any existing content.",
    )
    .with_parameter(ToolParameter::new("path", "Path to the file to write", true))
    .with_parameter(ToolParameter::new("content", "Content to write", true))
    .with_parameter(
        ToolParameter::new(
            "create_dirs",
            "Create parent directories if they do not exist",
            false,
        )
        .with_type("boolean"),
    )
}

/// Execute the read_file tool
pub fn execute_read_file(call: &ToolCall) -> ToolResult {
    let path_str = match call.require_string("path") {
        Ok(p) => p,
        Err(e) => return ToolResult::failure(READ_FILE, ToolError::invalid_argument(e)),
    };

    let path = Path::new(path_str);

    if !path.exists() {
        return ToolResult::failure(READ_FILE, ToolError::not_found(path_str));
    }
    if !path.is_file() {
        return ToolResult::failure(
            READ_FILE,
            ToolError::invalid_argument(format!("'{}' is not a regular file", path_str)),
        );
    }

    match std::fs::metadata(path) {
        Ok(meta) if meta.len() > MAX_READ_SIZE => {
            return ToolResult::failure(
                READ_FILE,
                ToolError::execution_failed(format!(
                    "File too large: {} bytes (max {} bytes)",
                    meta.len(),
                    MAX_READ_SIZE
                )),
            );
        }
        Ok(_) => {}
        Err(e) => return ToolResult::failure(READ_FILE, io_error_to_tool_error(&e, path_str)),
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return ToolResult::failure(READ_FILE, io_error_to_tool_error(&e, path_str)),
    };

    let output = apply_line_window(&content, call.get_i64("offset"), call.get_i64("limit"));
    let bytes = output.len();

    ToolResult::success(READ_FILE, output)
        .with_metadata(ToolResultMetadata {
            bytes: Some(bytes),
            ..Default::default()
        })
        .with_path(path_str)
}

/// Execute the write_file tool
pub fn execute_write_file(call: &ToolCall) -> ToolResult {
    let path_str = match call.require_string("path") {
        Ok(p) => p,
        Err(e) => return ToolResult::failure(WRITE_FILE, ToolError::invalid_argument(e)),
    };
    let content = match call.require_string("content") {
        Ok(c) => c,
        Err(e) => return ToolResult::failure(WRITE_FILE, ToolError::invalid_argument(e)),
    };

    let path = Path::new(path_str);
    let create_dirs = call.get_bool("create_dirs").unwrap_or(false);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        if create_dirs {
            if let Err(e) = std::fs::create_dir_all(parent) {
                return ToolResult::failure(WRITE_FILE, io_error_to_tool_error(&e, path_str));
            }
        } else {
            return ToolResult::failure(
                WRITE_FILE,
                ToolError::new(
                    "NOT_FOUND",
                    format!(
                        "Parent directory does not exist: {} (pass create_dirs: true to create it)",
                        parent.display()
                    ),
                ),
            );
        }
    }

    let bytes = content.len();
    match std::fs::write(path, content) {
        Ok(()) => ToolResult::success(
            WRITE_FILE,
            format!("Wrote {} bytes to {}", bytes, path_str),
        )
        .with_metadata(ToolResultMetadata {
            bytes: Some(bytes),
            ..Default::default()
        })
        .with_path(path_str),
        Err(e) => ToolResult::failure(WRITE_FILE, io_error_to_tool_error(&e, path_str)),
    }
}

/// Slice file content by optional line offset and limit.
fn apply_line_window(content: &str, offset: Option<i64>, limit: Option<i64>) -> String {
    if offset.is_none() && limit.is_none() {
        return content.to_string();
    }

    let lines: Vec<&str> = content.lines().collect();
    let start = offset.unwrap_or(0).max(0) as usize;
    let count = limit.map(|l| l.max(0) as usize).unwrap_or(lines.len());

    if start >= lines.len() {
        return String::new();
    }

    lines[start..]
        .iter()
        .take(count)
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

fn io_error_to_tool_error(e: &std::io::Error, path: &str) -> ToolError {
    match e.kind() {
        std::io::ErrorKind::NotFound => ToolError::not_found(path),
        std::io::ErrorKind::PermissionDenied => ToolError::permission_denied(path),
        _ => ToolError::execution_failed(format!("I/O error on {}: {}", path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file_with(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_read_file() {
        let (_dir, path) = temp_file_with("hello\nworld\n");
        let call = ToolCall::new(READ_FILE).with_arg("path", path.to_str().unwrap());
        let result = execute_read_file(&call);

        assert!(result.is_success());
        assert_eq!(result.output(), Some("hello\nworld\n"));
        assert_eq!(result.metadata.path.as_deref(), path.to_str());
    }

    #[test]
    fn test_read_file_with_offset_and_limit() {
        let (_dir, path) = temp_file_with("a\nb\nc\nd\ne\n");
        let call = ToolCall::new(READ_FILE)
            .with_arg("path", path.to_str().unwrap())
            .with_arg("offset", 1)
            .with_arg("limit", 2);
        let result = execute_read_file(&call);

        assert!(result.is_success());
        assert_eq!(result.output(), Some("b\nc"));
    }

    #[test]
    fn test_read_file_offset_past_end() {
        let (_dir, path) = temp_file_with("one line\n");
        let call = ToolCall::new(READ_FILE)
            .with_arg("path", path.to_str().unwrap())
            .with_arg("offset", 10);
        let result = execute_read_file(&call);

        assert!(result.is_success());
        assert_eq!(result.output(), Some(""));
    }

    #[test]
    fn test_read_file_not_found() {
        let call = ToolCall::new(READ_FILE).with_arg("path", "/nonexistent/file.txt");
        let result = execute_read_file(&call);

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let call = ToolCall::new(WRITE_FILE)
            .with_arg("path", path.to_str().unwrap())
            .with_arg("content", "written content");
        let result = execute_write_file(&call);

        assert!(result.is_success());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "written content");
        assert_eq!(result.metadata.bytes, Some(15));
    }

    #[test]
    fn test_write_file_missing_parent_without_create_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub/dir/out.txt");
        let call = ToolCall::new(WRITE_FILE)
            .with_arg("path", path.to_str().unwrap())
            .with_arg("content", "x");
        let result = execute_write_file(&call);

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
        assert!(result.error().unwrap().message.contains("create_dirs"));
    }

    #[test]
    fn test_write_file_create_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub/dir/out.txt");
        let call = ToolCall::new(WRITE_FILE)
            .with_arg("path", path.to_str().unwrap())
            .with_arg("content", "nested")
            .with_arg("create_dirs", true);
        let result = execute_write_file(&call);

        assert!(result.is_success());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_missing_content() {
        let call = ToolCall::new(WRITE_FILE).with_arg("path", "/tmp/x.txt");
        let result = execute_write_file(&call);

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
        assert!(result.error().unwrap().message.contains("content"));
    }
}

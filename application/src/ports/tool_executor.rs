//! Tool Executor port
//!
//! Defines the interface for executing tools (commands, file operations,
//! cluster and VCS queries).

use async_trait::async_trait;
use steward_domain::{ToolCall, ToolDefinition, ToolResult};

/// Port for tool execution
///
/// This port defines how the application layer dispatches tool calls.
/// Implementations (adapters) live in the infrastructure layer. Executing an
/// unknown tool name must return a failure result, never panic — the name
/// comes from the model and may be stale or invented.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Definitions of all registered tools.
    fn tool_definitions(&self) -> Vec<ToolDefinition>;

    /// Definition of a specific tool, if registered.
    fn get_tool_info(&self, name: &str) -> Option<ToolDefinition> {
        self.tool_definitions().into_iter().find(|t| t.name == name)
    }

    /// Check if a tool is registered.
    fn has_tool(&self, name: &str) -> bool {
        self.get_tool_info(name).is_some()
    }

    /// Names of all registered tools.
    fn tool_names(&self) -> Vec<String> {
        self.tool_definitions().into_iter().map(|t| t.name).collect()
    }

    /// Schemas of all registered tools, in the shape sent to the LLM.
    fn tool_schemas(&self) -> Vec<serde_json::Value> {
        self.tool_definitions()
            .iter()
            .map(|t| t.to_schema_json())
            .collect()
    }

    /// Execute a tool call asynchronously.
    async fn execute(&self, call: &ToolCall) -> ToolResult;
}

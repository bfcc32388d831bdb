//! Tool provider abstraction
//!
//! A [`ToolProvider`] is an external source of tools the registry can
//! aggregate: the builtin shell/file tools, a `kubectl` wrapper, a `git`
//! wrapper. Providers report availability (a CLI wrapper without its
//! binary on PATH simply never registers), expose their definitions, and
//! execute calls routed to them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  ToolRegistry                   │
//! │   (aggregates providers, routes by priority)    │
//! └─────────────────────────────────────────────────┘
//!         │               │               │
//!         ▼               ▼               ▼
//!   ┌──────────┐    ┌──────────┐    ┌──────────┐
//!   │ Builtin  │    │Kubernetes│    │   Git    │
//!   │ priority │    │ priority │    │ priority │
//!   │    10    │    │    50    │    │    40    │
//!   └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! When two providers expose the same name the registry registers by
//! descending priority and the later registration wins; re-registering a
//! provider set is the hot-reload path after credentials or config change.

use async_trait::async_trait;
use thiserror::Error;

use super::entities::{ToolCall, ToolDefinition};
use super::value_objects::ToolResult;

/// Error type for tool provider operations
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider is not available (e.g., CLI tool not installed)
    #[error("Provider not available: {0}")]
    NotAvailable(String),

    /// Failed to discover tools from the provider
    #[error("Discovery failed: {0}")]
    DiscoveryFailed(String),
}

/// Tool provider abstraction - external source of tools
#[async_trait]
pub trait ToolProvider: Send + Sync {
    /// Unique identifier for this provider ("builtin", "kubernetes", "git")
    fn id(&self) -> &str;

    /// Display name for user-facing output
    fn display_name(&self) -> &str;

    /// Priority for registration order (higher registers first; a
    /// same-named tool from a later registration overwrites)
    fn priority(&self) -> i32 {
        0
    }

    /// Check if the provider is available and properly configured.
    /// For CLI wrappers this checks the binary is installed.
    async fn is_available(&self) -> bool;

    /// Discover available tools from this provider
    async fn discover_tools(&self) -> Result<Vec<ToolDefinition>, ProviderError>;

    /// Execute a tool call. The tool name must be one this provider
    /// returned from `discover_tools()`; anything else is a NOT_FOUND
    /// failure result, never a panic.
    async fn execute(&self, call: &ToolCall) -> ToolResult;

    /// Check if this provider has a specific tool
    async fn has_tool(&self, tool_name: &str) -> bool {
        match self.discover_tools().await {
            Ok(tools) => tools.iter().any(|t| t.name == tool_name),
            Err(_) => false,
        }
    }
}

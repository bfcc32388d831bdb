//! Tool registry
//!
//! The [`ToolRegistry`] aggregates tool providers and implements
//! [`ToolExecutorPort`]: discovery walks providers by descending priority,
//! merges their definitions into one catalogue, and execution routes each
//! call to the provider that registered its name.
//!
//! # Usage
//!
//! ```ignore
//! use steward_infrastructure::tools::{BuiltinToolProvider, KubernetesToolProvider, ToolRegistry};
//!
//! let mut registry = ToolRegistry::new()
//!     .register(KubernetesToolProvider::new())   // priority: 50
//!     .register(BuiltinToolProvider::new(validator)); // priority: 10
//!
//! registry.discover().await?;
//!
//! let call = ToolCall::new("kubectl_get").with_arg("resource", "pods");
//! let result = registry.execute(&call).await;
//! ```
//!
//! # Name conflicts
//!
//! When two providers expose the same tool name, the later registration
//! wins: the walk is by descending priority, so whichever provider is
//! registered last for that name replaces the earlier definition and
//! takes over routing. Re-running `discover()` after credentials or
//! config change re-applies the same rule, which is what makes it the
//! hot-reload path.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use steward_application::ports::tool_executor::ToolExecutorPort;
use steward_domain::tool::{
    entities::{ToolCall, ToolDefinition},
    provider::ToolProvider,
    value_objects::{ToolError, ToolResult},
};

/// Tool registry that aggregates multiple providers.
pub struct ToolRegistry {
    /// Registered providers
    providers: Vec<Arc<dyn ToolProvider>>,
    /// Tool name -> provider ID mapping (cached after discovery)
    tool_mapping: HashMap<String, String>,
    /// Merged tool catalogue, in registration order
    definitions: Vec<ToolDefinition>,
    /// Whether discovery has been run
    discovered: bool,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            tool_mapping: HashMap::new(),
            definitions: Vec::new(),
            discovered: false,
        }
    }

    /// Register a tool provider
    pub fn register<P: ToolProvider + 'static>(mut self, provider: P) -> Self {
        self.providers.push(Arc::new(provider));
        self.discovered = false; // Invalidate cache
        self
    }

    /// Register a tool provider (Arc version)
    pub fn register_arc(mut self, provider: Arc<dyn ToolProvider>) -> Self {
        self.providers.push(provider);
        self.discovered = false;
        self
    }

    /// Discover tools from all providers.
    ///
    /// Must be called before executing anything. Unavailable providers are
    /// skipped; a provider whose discovery fails is logged and skipped, it
    /// never poisons the rest of the registry.
    pub async fn discover(&mut self) -> Result<(), String> {
        // Walk providers by priority (descending)
        self.providers
            .sort_by_key(|p| std::cmp::Reverse(p.priority()));

        let mut definitions: Vec<ToolDefinition> = Vec::new();
        let mut tool_mapping: HashMap<String, String> = HashMap::new();

        for provider in &self.providers {
            if !provider.is_available().await {
                tracing::info!(provider = provider.id(), "Provider not available, skipping");
                continue;
            }

            match provider.discover_tools().await {
                Ok(tools) => {
                    for tool in tools {
                        if let Some(previous) =
                            tool_mapping.insert(tool.name.clone(), provider.id().to_string())
                        {
                            tracing::debug!(
                                tool = %tool.name,
                                previous = %previous,
                                provider = provider.id(),
                                "Tool re-registered, later provider wins"
                            );
                            definitions.retain(|d| d.name != tool.name);
                        } else {
                            tracing::debug!(
                                tool = %tool.name,
                                provider = provider.id(),
                                "Registered tool"
                            );
                        }
                        definitions.push(tool);
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        provider = provider.id(),
                        error = %e,
                        "Failed to discover tools from provider"
                    );
                }
            }
        }

        self.definitions = definitions;
        self.tool_mapping = tool_mapping;
        self.discovered = true;

        Ok(())
    }

    /// Get the provider that currently owns a tool name
    fn provider_for(&self, tool_name: &str) -> Option<&Arc<dyn ToolProvider>> {
        let provider_id = self.tool_mapping.get(tool_name)?;
        self.providers.iter().find(|p| p.id() == provider_id)
    }

    /// ID of the provider that currently owns a tool name
    pub fn provider_id_for(&self, tool_name: &str) -> Option<&str> {
        self.tool_mapping.get(tool_name).map(|s| s.as_str())
    }

    /// Get a list of registered provider IDs
    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Get statistics about registered tools
    pub fn stats(&self) -> RegistryStats {
        let mut tools_per_provider = HashMap::new();
        for provider_id in self.tool_mapping.values() {
            *tools_per_provider.entry(provider_id.clone()).or_insert(0) += 1;
        }

        RegistryStats {
            total_providers: self.providers.len(),
            total_tools: self.tool_mapping.len(),
            tools_per_provider,
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the registry
#[derive(Debug, Clone)]
pub struct RegistryStats {
    pub total_providers: usize,
    pub total_tools: usize,
    pub tools_per_provider: HashMap<String, usize>,
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.definitions.clone()
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        if !self.discovered {
            return ToolResult::failure(
                &call.tool_name,
                ToolError::execution_failed("Registry not initialized. Call discover() first."),
            );
        }

        match self.provider_for(&call.tool_name) {
            Some(provider) => provider.execute(call).await,
            None => ToolResult::failure(
                &call.tool_name,
                ToolError::unknown_tool(&call.tool_name),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::BuiltinToolProvider;
    use std::io::Write;
    use steward_domain::safety::{SafetyPolicy, SafetyValidator};
    use steward_domain::tool::provider::ProviderError;
    use tempfile::NamedTempFile;

    fn builtin() -> BuiltinToolProvider {
        BuiltinToolProvider::new(SafetyValidator::new(SafetyPolicy::default()))
    }

    /// Provider whose execute output identifies it, for routing assertions.
    struct NamedProvider {
        id: &'static str,
        priority: i32,
        tools: Vec<&'static str>,
        available: bool,
    }

    #[async_trait]
    impl ToolProvider for NamedProvider {
        fn id(&self) -> &str {
            self.id
        }

        fn display_name(&self) -> &str {
            self.id
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        async fn is_available(&self) -> bool {
            self.available
        }

        async fn discover_tools(&self) -> Result<Vec<ToolDefinition>, ProviderError> {
            Ok(self
                .tools
                .iter()
                .map(|name| ToolDefinition::new(*name, format!("{} from {}", name, self.id)))
                .collect())
        }

        async fn execute(&self, call: &ToolCall) -> ToolResult {
            ToolResult::success(&call.tool_name, format!("handled by {}", self.id))
        }
    }

    #[tokio::test]
    async fn test_registry_with_builtin() {
        let mut registry = ToolRegistry::new().register(builtin());
        registry.discover().await.unwrap();

        assert!(registry.has_tool("read_file"));
        assert!(registry.has_tool("write_file"));
        assert!(registry.has_tool("run_command"));
    }

    #[tokio::test]
    async fn test_registry_execute() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "registry test").unwrap();
        let path = temp_file.path().to_str().unwrap();

        let mut registry = ToolRegistry::new().register(builtin());
        registry.discover().await.unwrap();

        let call = ToolCall::new("read_file").with_arg("path", path);
        let result = registry.execute(&call).await;

        assert!(result.is_success());
        assert!(result.output().unwrap().contains("registry test"));
    }

    #[tokio::test]
    async fn test_registry_unknown_tool() {
        let mut registry = ToolRegistry::new().register(builtin());
        registry.discover().await.unwrap();

        let call = ToolCall::new("unknown_tool");
        let result = registry.execute(&call).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
        assert!(result.error().unwrap().message.contains("Unknown tool"));
    }

    #[tokio::test]
    async fn test_registry_not_discovered() {
        let registry = ToolRegistry::new().register(builtin());

        let call = ToolCall::new("read_file").with_arg("path", "/test");
        let result = registry.execute(&call).await;

        assert!(!result.is_success());
        assert!(result.error().unwrap().message.contains("not initialized"));
    }

    #[tokio::test]
    async fn test_later_registration_wins_name_conflict() {
        // Walk order is descending priority: "high" registers first,
        // "low" registers the shared name later and takes over.
        let mut registry = ToolRegistry::new()
            .register(NamedProvider {
                id: "low",
                priority: 10,
                tools: vec!["shared_tool"],
                available: true,
            })
            .register(NamedProvider {
                id: "high",
                priority: 90,
                tools: vec!["shared_tool", "high_only"],
                available: true,
            });
        registry.discover().await.unwrap();

        assert_eq!(registry.provider_id_for("shared_tool"), Some("low"));
        assert_eq!(registry.provider_id_for("high_only"), Some("high"));

        let result = registry.execute(&ToolCall::new("shared_tool")).await;
        assert_eq!(result.output(), Some("handled by low"));

        // One catalogue entry per name
        let names: Vec<String> = registry.tool_names();
        assert_eq!(names.iter().filter(|n| *n == "shared_tool").count(), 1);
    }

    #[tokio::test]
    async fn test_rediscovery_is_idempotent() {
        let mut registry = ToolRegistry::new()
            .register(NamedProvider {
                id: "low",
                priority: 10,
                tools: vec!["shared_tool"],
                available: true,
            })
            .register(NamedProvider {
                id: "high",
                priority: 90,
                tools: vec!["shared_tool"],
                available: true,
            });

        registry.discover().await.unwrap();
        let first = registry.stats();
        registry.discover().await.unwrap();
        let second = registry.stats();

        assert_eq!(first.total_tools, second.total_tools);
        assert_eq!(registry.provider_id_for("shared_tool"), Some("low"));
    }

    #[tokio::test]
    async fn test_unavailable_provider_skipped() {
        let mut registry = ToolRegistry::new()
            .register(NamedProvider {
                id: "offline",
                priority: 90,
                tools: vec!["offline_tool"],
                available: false,
            })
            .register(builtin());
        registry.discover().await.unwrap();

        assert!(!registry.has_tool("offline_tool"));
        assert!(registry.has_tool("run_command"));

        let stats = registry.stats();
        assert_eq!(stats.total_providers, 2);
        assert!(!stats.tools_per_provider.contains_key("offline"));
    }

    #[tokio::test]
    async fn test_registry_stats() {
        let mut registry = ToolRegistry::new().register(builtin());
        registry.discover().await.unwrap();

        let stats = registry.stats();
        assert_eq!(stats.total_providers, 1);
        assert_eq!(stats.total_tools, 3); // run_command, read_file, write_file
        assert_eq!(stats.tools_per_provider.get("builtin"), Some(&3));
    }

    #[tokio::test]
    async fn test_registry_provider_ids() {
        let registry = ToolRegistry::new().register(builtin());

        let ids = registry.provider_ids();
        assert!(ids.contains(&"builtin"));
    }

    #[tokio::test]
    async fn test_tool_schemas_shape() {
        let mut registry = ToolRegistry::new().register(builtin());
        registry.discover().await.unwrap();

        let schemas = registry.tool_schemas();
        assert_eq!(schemas.len(), 3);
        assert!(schemas.iter().all(|s| s["name"].is_string()
            && s["description"].is_string()
            && s["input_schema"]["type"] == "object"));
    }
}

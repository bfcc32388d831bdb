//! Infrastructure layer for steward
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: LLM provider gateways, tool providers,
//! conversation logging, and configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileAgentConfig, FileConfig, FileProvidersConfig,
    FileSafetyConfig, FileToolsConfig, Severity,
};
pub use logging::JsonlConversationLogger;
pub use providers::{AnthropicGateway, ProviderKind, RoutingGateway};
pub use tools::{
    BuiltinToolProvider, GitToolProvider, KubernetesToolProvider, RegistryStats, ToolRegistry,
};

#[cfg(feature = "bedrock")]
pub use providers::BedrockGateway;

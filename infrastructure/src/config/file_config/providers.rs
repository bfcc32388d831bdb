//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Anthropic API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnthropicConfig {
    /// Environment variable name for the API key (default: "ANTHROPIC_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Anthropic API.
    pub base_url: String,
    /// Anthropic API version header.
    pub api_version: String,
}

impl Default for FileAnthropicConfig {
    fn default() -> Self {
        Self {
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
        }
    }
}

impl FileAnthropicConfig {
    /// Resolve the API key: inline config value first, then the named
    /// environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = &self.api_key
            && !key.is_empty()
        {
            return Some(key.clone());
        }
        std::env::var(&self.api_key_env).ok().filter(|k| !k.is_empty())
    }
}

/// AWS Bedrock provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBedrockConfig {
    /// AWS region for Bedrock models (default: "us-east-1").
    pub region: String,
    /// AWS profile name for credentials.
    pub profile: Option<String>,
    /// Prefix model ids with the region for cross-region inference.
    pub cross_region: bool,
}

impl Default for FileBedrockConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            profile: None,
            cross_region: false,
        }
    }
}

/// Complete provider configuration.
///
/// # Example
///
/// ```toml
/// [providers]
/// default = "anthropic"
///
/// [providers.anthropic]
/// api_key_env = "ANTHROPIC_API_KEY"
///
/// [providers.bedrock]
/// region = "eu-west-1"
///
/// [providers.routing]
/// "claude-haiku-4.5" = "bedrock"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Default provider: "anthropic" or "bedrock".
    pub default: Option<String>,
    /// Anthropic API settings.
    pub anthropic: FileAnthropicConfig,
    /// AWS Bedrock settings.
    pub bedrock: FileBedrockConfig,
    /// Explicit model → provider routing overrides.
    pub routing: HashMap<String, String>,
}

impl FileProvidersConfig {
    /// The effective default provider name.
    pub fn default_provider(&self) -> &str {
        self.default.as_deref().unwrap_or("anthropic")
    }
}

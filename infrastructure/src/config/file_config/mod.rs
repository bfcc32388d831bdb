//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain/application
//! types (`AgentParams`, `SafetyPolicy`) after validation.

mod agent;
mod providers;
mod safety;
mod tools;

pub use agent::FileAgentConfig;
pub use providers::{FileAnthropicConfig, FileBedrockConfig, FileProvidersConfig};
pub use safety::{FilePentestConfig, FileSafetyConfig};
pub use tools::{
    FileBuiltinToolsConfig, FileGitToolsConfig, FileKubernetesToolsConfig, FileToolsConfig,
};

use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Known provider names for `providers.default` and `providers.routing`.
const KNOWN_PROVIDERS: &[&str] = &["anthropic", "bedrock"];

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Agent loop settings.
    pub agent: FileAgentConfig,
    /// Safety policy settings.
    pub safety: FileSafetyConfig,
    /// LLM provider settings.
    pub providers: FileProvidersConfig,
    /// Tool provider settings.
    pub tools: FileToolsConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Model name and pentest intensity parse failures
    /// 2. An unknown `providers.default` name
    /// 3. A zero iteration budget
    /// 4. Pentest tooling enabled without a target whitelist
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Parse validation with fallbacks
        issues.extend(self.agent.parse_model().1);
        issues.extend(self.safety.pentest.parse_max_intensity().1);

        // 2. Unknown default provider
        let default = self.providers.default_provider();
        if !KNOWN_PROVIDERS.contains(&default) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnknownProvider {
                    name: default.to_string(),
                },
                format!(
                    "providers.default: unknown provider '{}', falling back to 'anthropic'",
                    default
                ),
            ));
        }

        // 3. Zero iteration budget exhausts before the first tool call
        if self.agent.max_iterations == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroIterationBudget,
                "agent.max_iterations is 0; every request will hit the iteration limit immediately",
            ));
        }

        // 4. Pentest enabled with nothing whitelisted
        if self.safety.pentest.enabled && self.safety.pentest.allowed_targets.is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::PentestWithoutTargets,
                "safety.pentest is enabled but allowed_targets is empty; \
                 scans have no declared scope",
            ));
        }

        issues
    }
}

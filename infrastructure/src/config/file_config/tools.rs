//! Tools configuration from TOML (`[tools]` section)
//!
//! Controls which tool provider groups register at startup and the default
//! working directory handed to `run_command`.
//!
//! ```toml
//! [tools]
//! working_dir = "/srv/deploys"
//!
//! [tools.kubernetes]
//! enabled = false
//! ```

use serde::{Deserialize, Serialize};

/// Builtin tools (run_command, read_file, write_file).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBuiltinToolsConfig {
    pub enabled: bool,
}

impl Default for FileBuiltinToolsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Kubernetes tools (`kubectl_*`). Only register when `kubectl` is on PATH.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKubernetesToolsConfig {
    pub enabled: bool,
}

impl Default for FileKubernetesToolsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Git tools (`git_*`). Only register when `git` is on PATH.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGitToolsConfig {
    pub enabled: bool,
}

impl Default for FileGitToolsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Complete tools configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolsConfig {
    /// Default working directory for command execution.
    pub working_dir: Option<String>,
    pub builtin: FileBuiltinToolsConfig,
    pub kubernetes: FileKubernetesToolsConfig,
    pub git: FileGitToolsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_provider_groups_enabled_by_default() {
        let config = FileToolsConfig::default();
        assert!(config.builtin.enabled);
        assert!(config.kubernetes.enabled);
        assert!(config.git.enabled);
        assert!(config.working_dir.is_none());
    }

    #[test]
    fn groups_can_be_disabled_individually() {
        let toml_str = r#"
working_dir = "/srv/deploys"

[kubernetes]
enabled = false
"#;
        let config: FileToolsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.working_dir.as_deref(), Some("/srv/deploys"));
        assert!(config.builtin.enabled);
        assert!(!config.kubernetes.enabled);
        assert!(config.git.enabled);
    }
}

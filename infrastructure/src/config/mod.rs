//! Configuration file loading for steward
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./steward.toml` or `./.steward.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/steward/config.toml`
//! 4. Fallback: `~/.config/steward/config.toml`
//! 5. Default values

mod file_config;
mod loader;
pub mod validation;

pub use file_config::{
    FileAgentConfig, FileAnthropicConfig, FileBedrockConfig, FileConfig, FilePentestConfig,
    FileProvidersConfig, FileSafetyConfig, FileToolsConfig,
};
pub use loader::ConfigLoader;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};

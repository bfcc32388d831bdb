//! Tool implementations and the registry that aggregates them.
//!
//! Tools are organized into providers:
//! - `builtin`: shell command and file operations, always available
//! - `kubernetes`: structured `kubectl` wrappers, present when the binary is
//! - `git`: read-oriented `git` wrappers, present when the binary is

pub mod builtin;
pub mod command;
pub mod file;
pub mod git;
pub mod kubernetes;

mod cli;
mod registry;

pub use builtin::{BUILTIN_PRIORITY, BuiltinToolProvider};
pub use git::{GIT_PRIORITY, GitToolProvider};
pub use kubernetes::{KUBERNETES_PRIORITY, KubernetesToolProvider};
pub use registry::{RegistryStats, ToolRegistry};

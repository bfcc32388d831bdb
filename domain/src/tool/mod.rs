//! Tool domain module
//!
//! Defines how the agent interacts with the local environment and the
//! infrastructure it manages: every capability is a [`ToolDefinition`]
//! (name, description, JSON input schema), invoked via a [`ToolCall`]
//! carrying the transport-assigned id, and resolved to a [`ToolResult`].
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolProvider │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (definitions)│    │ (invocation) │    │ (outcome)    │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! Risk is not declared on the definition; the safety layer classifies
//! every call by name and input at invocation time, so a renamed or
//! re-registered tool cannot carry a stale risk label.
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions, no I/O
//! - **Application** (`ToolExecutorPort`): port trait for dispatch
//! - **Infrastructure** (registry + providers): concrete execution with
//!   process spawning and file I/O

pub mod entities;
pub mod provider;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolParameter};
pub use provider::{ProviderError, ToolProvider};
pub use value_objects::{ToolError, ToolResult, ToolResultMetadata};

//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — the LLM models the agent can talk to
//! - [`string`] — small string utilities (UTF-8 safe truncation)

pub mod model;
pub mod string;

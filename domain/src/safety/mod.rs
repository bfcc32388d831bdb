//! Safety domain.
//!
//! Everything the agent is about to do passes through here first. The
//! module is stateless by design: a [`SafetyValidator`] is a pure function
//! of its [`SafetyPolicy`] and the inputs it is asked about.
//!
//! Three classification surfaces plus one scrubber:
//!
//! - [`SafetyValidator::validate_command`] — shell command lines
//! - [`SafetyValidator::validate_tool_call`] — tool name + input
//! - [`SafetyValidator::validate_resource_operation`] — verb/resource/environment triples
//! - [`SafetyValidator::sanitize_output`] — secret masking + bounded truncation
//!
//! Every verdict is a [`ValidationResult`]: safe or not, at which
//! [`RiskLevel`], and whether a human should confirm before execution.

pub mod policy;
pub mod validator;
pub mod value_objects;

pub use policy::{PentestPolicy, SafetyPolicy, ScanIntensity};
pub use validator::SafetyValidator;
pub use value_objects::{RiskLevel, ValidationResult};

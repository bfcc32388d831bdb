//! Configuration issue reporting.
//!
//! Config validation never hard-fails: a misspelled enum value or a
//! questionable combination falls back to a default and surfaces here as a
//! structured issue the binary can print before starting.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field did not parse into its enum; a default was used.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A model name was present but empty.
    EmptyModelName { field: String },
    /// `providers.default` names a provider this build does not know.
    UnknownProvider { name: String },
    /// `agent.max_iterations = 0` — the loop would exhaust immediately.
    ZeroIterationBudget,
    /// Pentest tooling enabled without any allowed targets configured.
    PentestWithoutTargets,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", tag, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_severity_tag() {
        let issue = ConfigIssue::warning(
            ConfigIssueCode::ZeroIterationBudget,
            "agent.max_iterations is 0; no tool call will ever run",
        );
        let rendered = issue.to_string();
        assert!(rendered.starts_with("warning: "));
        assert!(rendered.contains("max_iterations"));
    }

    #[test]
    fn codes_compare_structurally() {
        let a = ConfigIssueCode::UnknownProvider {
            name: "azure".to_string(),
        };
        let b = ConfigIssueCode::UnknownProvider {
            name: "azure".to_string(),
        };
        assert_eq!(a, b);
    }
}

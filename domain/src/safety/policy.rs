//! Safety policy configuration.
//!
//! The policy is operator data, loaded from the `[safety]` config section
//! and handed to the validator at construction. The validator itself never
//! mutates it.

use serde::{Deserialize, Serialize};

/// How aggressive a permitted scan may be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanIntensity {
    Passive,
    #[default]
    Normal,
    Aggressive,
}

/// Policy for penetration-testing tooling.
///
/// Disabled by default. When enabled, pentest commands and tools are
/// classified safe-but-high-risk, with confirmation controlled by
/// [`require_confirmation`](Self::require_confirmation).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PentestPolicy {
    /// Master switch for pentest tooling.
    pub enabled: bool,
    /// Whether permitted pentest invocations still need a human yes.
    pub require_confirmation: bool,
    /// Targets scans may touch (hostnames, CIDRs). Informational for the
    /// operator and surfaced in config validation; matching is out of
    /// scope for the validator itself.
    pub allowed_targets: Vec<String>,
    /// Ceiling on scan aggressiveness.
    pub max_intensity: ScanIntensity,
    /// Scan type names that stay forbidden even when enabled.
    pub prohibited_scan_types: Vec<String>,
}

impl Default for PentestPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            require_confirmation: true,
            allowed_targets: Vec::new(),
            max_intensity: ScanIntensity::Normal,
            prohibited_scan_types: Vec::new(),
        }
    }
}

/// Operator-supplied safety policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyPolicy {
    /// Substrings that make a command an immediate critical refusal,
    /// matched case-insensitively anywhere in the command line.
    pub dangerous_substrings: Vec<String>,
    /// Pentest tooling policy.
    pub pentest: PentestPolicy,
}

impl SafetyPolicy {
    pub fn with_dangerous_substrings(mut self, substrings: Vec<String>) -> Self {
        self.dangerous_substrings = substrings;
        self
    }

    pub fn with_pentest(mut self, pentest: PentestPolicy) -> Self {
        self.pentest = pentest;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pentest_disabled_by_default() {
        let policy = SafetyPolicy::default();
        assert!(!policy.pentest.enabled);
        assert!(policy.pentest.require_confirmation);
        assert!(policy.dangerous_substrings.is_empty());
    }

    #[test]
    fn scan_intensity_ordering() {
        assert!(ScanIntensity::Passive < ScanIntensity::Normal);
        assert!(ScanIntensity::Normal < ScanIntensity::Aggressive);
        assert_eq!(ScanIntensity::default(), ScanIntensity::Normal);
    }

    #[test]
    fn policy_deserializes_from_partial_input() {
        let policy: SafetyPolicy = serde_json::from_str(
            r#"{
                "dangerous_substrings": ["--force", "curl | sh"],
                "pentest": {"enabled": true}
            }"#,
        )
        .unwrap();
        assert_eq!(policy.dangerous_substrings.len(), 2);
        assert!(policy.pentest.enabled);
        // Unspecified fields fall back to defaults
        assert!(policy.pentest.require_confirmation);
        assert_eq!(policy.pentest.max_intensity, ScanIntensity::Normal);
    }
}

//! Safety value objects: risk levels and validation verdicts.

use serde::{Deserialize, Serialize};

/// Risk classification for commands, tool calls, and resource operations.
///
/// Ordered: `Low < Medium < High < Critical`. `Critical` findings are
/// refused outright; `High` and `Medium` proceed with confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verdict of a safety check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether execution may proceed at all.
    pub is_safe: bool,
    /// Human-readable explanation of the classification. Empty for plain
    /// low-risk passes.
    pub reason: String,
    /// Whether a human should confirm before execution proceeds.
    pub requires_confirmation: bool,
    /// Severity of what was detected.
    pub risk_level: RiskLevel,
}

impl ValidationResult {
    /// A clean pass at the given level, no confirmation required.
    pub fn safe(risk_level: RiskLevel) -> Self {
        Self {
            is_safe: true,
            reason: String::new(),
            requires_confirmation: false,
            risk_level,
        }
    }

    /// Allowed, but a human should confirm first.
    pub fn safe_with_confirmation(risk_level: RiskLevel, reason: impl Into<String>) -> Self {
        Self {
            is_safe: true,
            reason: reason.into(),
            requires_confirmation: true,
            risk_level,
        }
    }

    /// Refused outright.
    pub fn blocked(risk_level: RiskLevel, reason: impl Into<String>) -> Self {
        Self {
            is_safe: false,
            reason: reason.into(),
            requires_confirmation: false,
            risk_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn risk_level_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Critical).unwrap(),
            "\"critical\""
        );
        let parsed: RiskLevel = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, RiskLevel::Medium);
    }

    #[test]
    fn constructors() {
        let ok = ValidationResult::safe(RiskLevel::Low);
        assert!(ok.is_safe);
        assert!(!ok.requires_confirmation);

        let confirm = ValidationResult::safe_with_confirmation(RiskLevel::High, "touches prod");
        assert!(confirm.is_safe);
        assert!(confirm.requires_confirmation);
        assert_eq!(confirm.risk_level, RiskLevel::High);

        let no = ValidationResult::blocked(RiskLevel::Critical, "mass deletion");
        assert!(!no.is_safe);
        assert_eq!(no.risk_level, RiskLevel::Critical);
    }
}

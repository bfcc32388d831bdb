//! Safety configuration from TOML (`[safety]` section)

use crate::config::validation::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use steward_domain::{PentestPolicy, SafetyPolicy, ScanIntensity};

/// Raw pentest policy from TOML (`[safety.pentest]`).
///
/// Disabled by default; enabling it is an explicit operator decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePentestConfig {
    pub enabled: bool,
    pub require_confirmation: bool,
    pub allowed_targets: Vec<String>,
    /// "passive", "normal", or "aggressive".
    pub max_intensity: String,
    pub prohibited_scan_types: Vec<String>,
}

impl Default for FilePentestConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            require_confirmation: true,
            allowed_targets: Vec::new(),
            max_intensity: "normal".to_string(),
            prohibited_scan_types: Vec::new(),
        }
    }
}

impl FilePentestConfig {
    /// Parse the intensity ceiling, warning and falling back on unknown values.
    pub fn parse_max_intensity(&self) -> (ScanIntensity, Vec<ConfigIssue>) {
        match self.max_intensity.to_lowercase().as_str() {
            "passive" => (ScanIntensity::Passive, vec![]),
            "normal" => (ScanIntensity::Normal, vec![]),
            "aggressive" => (ScanIntensity::Aggressive, vec![]),
            other => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "safety.pentest.max_intensity".to_string(),
                        value: other.to_string(),
                        valid_values: vec![
                            "passive".to_string(),
                            "normal".to_string(),
                            "aggressive".to_string(),
                        ],
                    },
                    format!(
                        "safety.pentest.max_intensity: unknown value '{}', falling back to 'normal'",
                        self.max_intensity
                    ),
                );
                (ScanIntensity::default(), vec![issue])
            }
        }
    }
}

/// Raw safety configuration from TOML.
///
/// # Example
///
/// ```toml
/// [safety]
/// dangerous_substrings = ["--force", "curl | sh"]
///
/// [safety.pentest]
/// enabled = true
/// require_confirmation = true
/// allowed_targets = ["staging.internal"]
/// max_intensity = "normal"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSafetyConfig {
    /// Operator-banned substrings, matched case-insensitively in commands.
    pub dangerous_substrings: Vec<String>,
    pub pentest: FilePentestConfig,
}

impl FileSafetyConfig {
    /// Convert into the domain policy, collecting parse warnings.
    pub fn to_policy(&self) -> (SafetyPolicy, Vec<ConfigIssue>) {
        let (max_intensity, issues) = self.pentest.parse_max_intensity();

        let policy = SafetyPolicy::default()
            .with_dangerous_substrings(self.dangerous_substrings.clone())
            .with_pentest(PentestPolicy {
                enabled: self.pentest.enabled,
                require_confirmation: self.pentest.require_confirmation,
                allowed_targets: self.pentest.allowed_targets.clone(),
                max_intensity,
                prohibited_scan_types: self.pentest.prohibited_scan_types.clone(),
            });

        (policy, issues)
    }
}

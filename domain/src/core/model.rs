//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available LLM models (Value Object)
///
/// The agent speaks the Messages tool-use shape natively, so the named
/// variants are the Claude family. Anything else rides in [`Model::Custom`]
/// and is handed to the transport verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    ClaudeSonnet46,
    ClaudeOpus46,
    ClaudeSonnet45,
    ClaudeHaiku45,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeSonnet46 => "claude-sonnet-4.6",
            Model::ClaudeOpus46 => "claude-opus-4.6",
            Model::ClaudeSonnet45 => "claude-sonnet-4.5",
            Model::ClaudeHaiku45 => "claude-haiku-4.5",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a Claude model
    ///
    /// Used by the routing gateway for provider family inference.
    pub fn is_claude(&self) -> bool {
        matches!(
            self,
            Model::ClaudeSonnet46
                | Model::ClaudeOpus46
                | Model::ClaudeSonnet45
                | Model::ClaudeHaiku45
        )
    }
}

impl Default for Model {
    /// Returns the default model (Claude Sonnet 4.6)
    fn default() -> Self {
        Model::ClaudeSonnet46
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "claude-sonnet-4.6" => Model::ClaudeSonnet46,
            "claude-opus-4.6" => Model::ClaudeOpus46,
            "claude-sonnet-4.5" => Model::ClaudeSonnet45,
            "claude-haiku-4.5" => Model::ClaudeHaiku45,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

//! LLM provider adapters
//!
//! Each adapter implements the application layer's `LlmGateway` port for one
//! backend. `RoutingGateway` composes them and picks a backend per request.

pub mod anthropic;
pub mod routing;

#[cfg(feature = "bedrock")]
pub mod bedrock;

pub use anthropic::AnthropicGateway;
pub use routing::RoutingGateway;

#[cfg(feature = "bedrock")]
pub use bedrock::BedrockGateway;

/// Provider families the router can address.
///
/// Derived from [`LlmGateway::name()`], so adding a backend means adding a
/// variant here and teaching `from_name` its adapter name.
///
/// [`LlmGateway::name()`]: steward_application::ports::llm_gateway::LlmGateway::name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Anthropic,
    Bedrock,
}

impl ProviderKind {
    /// Parse a provider name from config or an adapter's `name()`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "anthropic" => Some(ProviderKind::Anthropic),
            "bedrock" => Some(ProviderKind::Bedrock),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Bedrock => "bedrock",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_kind_parsing() {
        assert_eq!(ProviderKind::from_name("anthropic"), Some(ProviderKind::Anthropic));
        assert_eq!(ProviderKind::from_name("Bedrock"), Some(ProviderKind::Bedrock));
        assert_eq!(ProviderKind::from_name("openai"), None);
        assert_eq!(ProviderKind::from_name(""), None);
    }

    #[test]
    fn provider_kind_round_trips_through_name() {
        for kind in [ProviderKind::Anthropic, ProviderKind::Bedrock] {
            assert_eq!(ProviderKind::from_name(kind.as_str()), Some(kind));
        }
    }
}

//! Model-based provider routing.
//!
//! Wraps the configured gateways behind a single [`LlmGateway`] and picks
//! one per request by model. Routing priority:
//!
//! 1. Explicit routing table (from config `[providers.routing]`)
//! 2. Model family inference: Claude models prefer the native Anthropic API
//! 3. Configured default provider
//! 4. First registered provider
//! 5. No providers at all: `ModelNotAvailable`

use super::ProviderKind;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use steward_application::ports::llm_gateway::{ChatRequest, GatewayError, LlmGateway};
use steward_domain::{LlmReply, Model};
use tracing::debug;

use crate::config::FileProvidersConfig;

pub struct RoutingGateway {
    providers: Vec<Arc<dyn LlmGateway>>,
    /// Model name -> provider index, built from the config routing table.
    explicit_model_routing: HashMap<String, usize>,
    default_kind: ProviderKind,
}

impl RoutingGateway {
    pub fn new(providers: Vec<Arc<dyn LlmGateway>>, config: &FileProvidersConfig) -> Self {
        let mut explicit_model_routing = HashMap::new();

        for (model_name, provider_name) in &config.routing {
            let Some(target_kind) = ProviderKind::from_name(provider_name) else {
                // Unknown provider names are reported by config validation;
                // routing just skips them.
                continue;
            };
            if let Some(idx) = providers.iter().position(|p| kind_of(p) == Some(target_kind)) {
                explicit_model_routing.insert(model_name.clone(), idx);
            }
        }

        Self {
            providers,
            explicit_model_routing,
            default_kind: ProviderKind::from_name(config.default_provider())
                .unwrap_or(ProviderKind::Anthropic),
        }
    }

    fn resolve_provider(&self, model: &Model) -> Result<&dyn LlmGateway, GatewayError> {
        // 1. Explicit routing table
        if let Some(&idx) = self.explicit_model_routing.get(model.as_str()) {
            return Ok(self.providers[idx].as_ref());
        }

        // 2. Model family inference
        if model.is_claude()
            && let Some(p) = self.find_kind(ProviderKind::Anthropic)
        {
            return Ok(p);
        }

        // 3. Configured default kind
        if let Some(p) = self.find_kind(self.default_kind) {
            return Ok(p);
        }

        // 4. First provider fallback
        self.providers
            .first()
            .map(|p| p.as_ref())
            .ok_or(GatewayError::ModelNotAvailable(
                "No providers configured".to_string(),
            ))
    }

    fn find_kind(&self, kind: ProviderKind) -> Option<&dyn LlmGateway> {
        self.providers
            .iter()
            .find(|p| kind_of(p) == Some(kind))
            .map(|p| p.as_ref())
    }
}

fn kind_of(provider: &Arc<dyn LlmGateway>) -> Option<ProviderKind> {
    ProviderKind::from_name(provider.name())
}

#[async_trait]
impl LlmGateway for RoutingGateway {
    fn name(&self) -> &str {
        "routing"
    }

    async fn send(&self, request: ChatRequest) -> Result<LlmReply, GatewayError> {
        let provider = self.resolve_provider(&request.model)?;
        debug!(model = %request.model, provider = provider.name(), "Routing request");
        provider.send(request).await
    }
}

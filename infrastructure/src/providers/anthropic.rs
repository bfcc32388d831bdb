//! Anthropic Messages API adapter.
//!
//! Stateless HTTP gateway: every call posts the full request to
//! `/v1/messages` and assembles the reply from the returned content
//! blocks. Auth and protocol version travel as headers.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use steward_application::ports::llm_gateway::{ChatRequest, GatewayError, LlmGateway};
use steward_domain::{ContentBlock, LlmReply, Model, StopReason};
use tracing::{debug, info, warn};

use crate::config::FileAnthropicConfig;

/// Per-request timeout. Generation with large histories is slow; this is
/// a backstop against a hung connection, not a latency target.
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Gateway adapter for the Anthropic HTTP API.
pub struct AnthropicGateway {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    api_version: String,
}

impl AnthropicGateway {
    /// Create a gateway with an already-resolved API key.
    pub fn new(api_key: impl Into<String>, config: &FileAnthropicConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
        }
    }

    /// Create a gateway if an API key can be resolved from config or
    /// environment. Returns `None` (with a log line) otherwise, so callers
    /// can fall through to other providers.
    pub fn try_new(config: &FileAnthropicConfig) -> Option<Self> {
        match config.resolve_api_key() {
            Some(key) => {
                info!(base_url = %config.base_url, "Anthropic API key found, provider enabled");
                Some(Self::new(key, config))
            }
            None => {
                warn!(
                    env = %config.api_key_env,
                    "No Anthropic API key in config or environment, provider disabled"
                );
                None
            }
        }
    }
}

#[async_trait]
impl LlmGateway for AnthropicGateway {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn send(&self, request: ChatRequest) -> Result<LlmReply, GatewayError> {
        let url = format!("{}/v1/messages", self.base_url);
        let body = build_request_body(&request);
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            tools = request.tools.len(),
            "Sending messages request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let body_text = response.text().await.map_err(map_transport_error)?;

        if !(200..300).contains(&status) {
            return Err(map_status(status, &body_text));
        }

        parse_response(&body_text)
    }
}

/// The wire id differs from the display name: dots become dashes
/// ("claude-sonnet-4.6" -> "claude-sonnet-4-6"). Custom ids pass through
/// untouched; the operator supplied the exact wire form.
fn api_model_id(model: &Model) -> String {
    match model {
        Model::Custom(id) => id.clone(),
        named => named.as_str().replace('.', "-"),
    }
}

fn build_request_body(request: &ChatRequest) -> serde_json::Value {
    let mut body = serde_json::json!({
        "model": api_model_id(&request.model),
        "max_tokens": request.max_tokens,
        "temperature": request.temperature,
        "messages": &request.messages,
    });
    if let Some(system) = &request.system {
        body["system"] = serde_json::json!(system);
    }
    if !request.tools.is_empty() {
        body["tools"] = serde_json::json!(&request.tools);
    }
    body
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Connection(e.to_string())
    }
}

fn map_status(status: u16, body: &str) -> GatewayError {
    let message = extract_error_message(body);
    match status {
        400 => GatewayError::InvalidRequest(message),
        401 | 403 => GatewayError::Connection(format!("Authentication failed: {}", message)),
        404 => GatewayError::ModelNotAvailable(message),
        429 => GatewayError::RateLimited(message),
        500..=599 => GatewayError::ServerError(message),
        other => GatewayError::Other(format!("HTTP {}: {}", other, message)),
    }
}

/// Pull `error.message` out of an API error body, falling back to the raw
/// body. Invalid-request messages must survive verbatim; history-corruption
/// detection reads them.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| body.to_string())
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    content: Vec<WireBlock>,
    stop_reason: Option<String>,
    model: Option<String>,
}

/// Response content block. Block types this agent does not consume
/// (e.g. server-side thinking) fold into `Unknown` and are dropped.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WireBlock {
    Text {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        input: serde_json::Value,
    },
    #[serde(other)]
    Unknown,
}

fn parse_response(body: &str) -> Result<LlmReply, GatewayError> {
    let wire: WireResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::Other(format!("Failed to parse response: {}", e)))?;

    let content = wire
        .content
        .into_iter()
        .filter_map(|block| match block {
            WireBlock::Text { text } => Some(ContentBlock::Text { text }),
            WireBlock::ToolUse { id, name, input } => {
                let input: HashMap<String, serde_json::Value> = match input {
                    serde_json::Value::Object(map) => map.into_iter().collect(),
                    _ => HashMap::new(),
                };
                Some(ContentBlock::ToolUse { id, name, input })
            }
            WireBlock::Unknown => {
                debug!("Dropping unrecognized content block from response");
                None
            }
        })
        .collect();

    Ok(LlmReply {
        content,
        stop_reason: wire.stop_reason.as_deref().map(StopReason::from_api),
        model: wire.model,
    })
}

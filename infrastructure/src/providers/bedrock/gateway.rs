//! Bedrock gateway
//!
//! Implements `LlmGateway` on top of the Bedrock Converse API. Authenticates
//! through the standard AWS credential chain (environment, shared profile,
//! instance metadata); no API key is involved.

use super::{model_map, types};
use crate::config::FileBedrockConfig;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::types as bedrock;
use steward_application::ports::llm_gateway::{ChatRequest, GatewayError, LlmGateway};
use steward_domain::LlmReply;
use tracing::{debug, info, warn};

pub struct BedrockGateway {
    client: BedrockClient,
    region: String,
    cross_region: bool,
}

impl BedrockGateway {
    /// Create a new Bedrock gateway.
    ///
    /// Resolves AWS configuration and creates a Bedrock Runtime client.
    pub async fn new(config: &FileBedrockConfig) -> Self {
        let sdk_config = load_sdk_config(config).await;
        Self::from_sdk_config(&sdk_config, config)
    }

    /// Try to create a new Bedrock gateway.
    ///
    /// Returns `None` when the AWS credential chain does not resolve.
    /// Used for auto-detection during DI assembly.
    pub async fn try_new(config: &FileBedrockConfig) -> Option<Self> {
        let sdk_config = load_sdk_config(config).await;

        let Some(credentials) = sdk_config.credentials_provider() else {
            warn!("Bedrock provider not available: no AWS credentials provider");
            return None;
        };
        match credentials.provide_credentials().await {
            Ok(_) => {
                info!(region = %config.region, "Bedrock provider initialized");
                Some(Self::from_sdk_config(&sdk_config, config))
            }
            Err(e) => {
                warn!("Bedrock provider not available: {}", e);
                None
            }
        }
    }

    fn from_sdk_config(sdk_config: &SdkConfig, config: &FileBedrockConfig) -> Self {
        Self {
            client: BedrockClient::new(sdk_config),
            region: config.region.clone(),
            cross_region: config.cross_region,
        }
    }
}

async fn load_sdk_config(config: &FileBedrockConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(ref profile) = config.profile {
        loader = loader.profile_name(profile);
    }

    loader.load().await
}

#[async_trait]
impl LlmGateway for BedrockGateway {
    fn name(&self) -> &str {
        "bedrock"
    }

    async fn send(&self, request: ChatRequest) -> Result<LlmReply, GatewayError> {
        let model_id =
            model_map::to_bedrock_model_id(&request.model, self.cross_region, &self.region);

        let messages = request
            .messages
            .iter()
            .map(types::to_bedrock_message)
            .collect::<Result<Vec<_>, _>>()?;

        let mut converse = self
            .client
            .converse()
            .model_id(&model_id)
            .set_messages(Some(messages))
            .inference_config(
                bedrock::InferenceConfiguration::builder()
                    .max_tokens(request.max_tokens as i32)
                    .temperature(request.temperature as f32)
                    .build(),
            );

        if let Some(system) = &request.system
            && !system.is_empty()
        {
            converse = converse
                .set_system(Some(vec![bedrock::SystemContentBlock::Text(system.clone())]));
        }

        if !request.tools.is_empty() {
            let bedrock_tools: Vec<bedrock::Tool> = request
                .tools
                .iter()
                .filter_map(types::convert_tool_schema)
                .collect();
            if !bedrock_tools.is_empty() {
                let tool_config = bedrock::ToolConfiguration::builder()
                    .set_tools(Some(bedrock_tools))
                    .build()
                    .map_err(|e| {
                        GatewayError::InvalidRequest(format!("Failed to build tool config: {}", e))
                    })?;
                converse = converse.tool_config(tool_config);
            }
        }

        debug!(
            model = %model_id,
            messages = request.messages.len(),
            tools = request.tools.len(),
            "Calling Bedrock Converse API"
        );

        let response = converse
            .send()
            .await
            .map_err(|e| types::convert_converse_error(&e))?;

        let stop_reason = response.stop_reason();
        let output = response.output().ok_or_else(|| {
            GatewayError::ServerError("No output in Bedrock response".to_string())
        })?;

        Ok(types::convert_converse_output(output, stop_reason, &model_id))
    }
}

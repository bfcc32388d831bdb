//! Type conversions between AWS Bedrock SDK and domain types
//!
//! Converts Bedrock Converse API responses to a domain [`LlmReply`], and
//! domain messages and tool schemas to Bedrock request formats.

use aws_sdk_bedrockruntime::types as bedrock;
use aws_smithy_types::Document;
use std::collections::HashMap;
use steward_application::ports::llm_gateway::GatewayError;
use steward_domain::{ApiMessage, ContentBlock, LlmReply, Role, StopReason};

// ─── Bedrock → Domain ────────────────────────────────────────────

/// Convert Bedrock stop reason to domain StopReason.
pub fn convert_stop_reason(reason: &bedrock::StopReason) -> StopReason {
    match reason {
        bedrock::StopReason::EndTurn => StopReason::EndTurn,
        bedrock::StopReason::ToolUse => StopReason::ToolUse,
        bedrock::StopReason::MaxTokens => StopReason::MaxTokens,
        other => StopReason::Other(format!("{:?}", other)),
    }
}

/// Convert a single Bedrock content block to a domain ContentBlock.
///
/// Returns `None` for unsupported block types (Image, GuardContent, etc.).
pub fn convert_content_block(block: &bedrock::ContentBlock) -> Option<ContentBlock> {
    match block {
        bedrock::ContentBlock::Text(text) => Some(ContentBlock::Text { text: text.clone() }),
        bedrock::ContentBlock::ToolUse(tool_use) => {
            let input = document_to_json(tool_use.input());
            let input_map = match input {
                serde_json::Value::Object(map) => map
                    .into_iter()
                    .collect::<HashMap<String, serde_json::Value>>(),
                _ => HashMap::new(),
            };
            Some(ContentBlock::ToolUse {
                id: tool_use.tool_use_id().to_string(),
                name: tool_use.name().to_string(),
                input: input_map,
            })
        }
        // Skip Image, GuardContent, Document, etc.
        _ => None,
    }
}

/// Convert a Bedrock ConverseOutput to a domain LlmReply.
pub fn convert_converse_output(
    output: &bedrock::ConverseOutput,
    stop_reason: &bedrock::StopReason,
    model_id: &str,
) -> LlmReply {
    let content = match output {
        bedrock::ConverseOutput::Message(message) => message
            .content()
            .iter()
            .filter_map(convert_content_block)
            .collect(),
        _ => return LlmReply::from_text(""),
    };

    LlmReply {
        content,
        stop_reason: Some(convert_stop_reason(stop_reason)),
        model: Some(model_id.to_string()),
    }
}

// ─── Domain → Bedrock ────────────────────────────────────────────

/// Convert an API message to a Bedrock Message.
pub fn to_bedrock_message(message: &ApiMessage) -> Result<bedrock::Message, GatewayError> {
    let role = match message.role {
        Role::User => bedrock::ConversationRole::User,
        Role::Assistant => bedrock::ConversationRole::Assistant,
    };

    let content = message
        .content
        .iter()
        .map(to_bedrock_block)
        .collect::<Result<Vec<_>, _>>()?;

    bedrock::Message::builder()
        .role(role)
        .set_content(Some(content))
        .build()
        .map_err(|e| GatewayError::InvalidRequest(format!("Failed to build message: {}", e)))
}

/// Convert a single domain content block to a Bedrock ContentBlock.
///
/// Tool results carry no status flag: failures are already encoded as JSON
/// in the result text, so the model sees them either way.
fn to_bedrock_block(block: &ContentBlock) -> Result<bedrock::ContentBlock, GatewayError> {
    match block {
        ContentBlock::Text { text } => Ok(bedrock::ContentBlock::Text(text.clone())),
        ContentBlock::ToolUse { id, name, input } => {
            let input_doc = Document::Object(
                input
                    .iter()
                    .map(|(k, v)| (k.clone(), json_to_document(v)))
                    .collect(),
            );
            bedrock::ToolUseBlock::builder()
                .tool_use_id(id)
                .name(name)
                .input(input_doc)
                .build()
                .map(bedrock::ContentBlock::ToolUse)
                .map_err(|e| {
                    GatewayError::InvalidRequest(format!("Failed to build tool_use block: {}", e))
                })
        }
        ContentBlock::ToolResult {
            tool_use_id,
            content,
        } => bedrock::ToolResultBlock::builder()
            .tool_use_id(tool_use_id)
            .content(bedrock::ToolResultContentBlock::Text(content.clone()))
            .build()
            .map(bedrock::ContentBlock::ToolResult)
            .map_err(|e| {
                GatewayError::InvalidRequest(format!("Failed to build tool_result block: {}", e))
            }),
    }
}

/// Convert a JSON tool schema (`{name, description, input_schema}`) to a
/// Bedrock Tool::ToolSpec.
pub fn convert_tool_schema(schema: &serde_json::Value) -> Option<bedrock::Tool> {
    let name = schema.get("name")?.as_str()?;
    let description = schema.get("description").and_then(|d| d.as_str());

    let input_schema_json = schema.get("input_schema").cloned().unwrap_or_else(|| {
        serde_json::json!({
            "type": "object",
            "properties": {},
        })
    });
    let input_schema = json_to_document(&input_schema_json);

    let mut builder = bedrock::ToolSpecification::builder()
        .name(name)
        .input_schema(bedrock::ToolInputSchema::Json(input_schema));
    if let Some(desc) = description {
        builder = builder.description(desc);
    }

    Some(bedrock::Tool::ToolSpec(builder.build().ok()?))
}

// ─── JSON ↔ Document helpers ─────────────────────────────────────

/// Convert a serde_json::Value to an aws_smithy_types::Document.
pub fn json_to_document(value: &serde_json::Value) -> Document {
    match value {
        serde_json::Value::Null => Document::Null,
        serde_json::Value::Bool(b) => Document::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Document::Number(aws_smithy_types::Number::PosInt(u))
            } else if let Some(i) = n.as_i64() {
                Document::Number(aws_smithy_types::Number::NegInt(i))
            } else if let Some(f) = n.as_f64() {
                Document::Number(aws_smithy_types::Number::Float(f))
            } else {
                Document::Null
            }
        }
        serde_json::Value::String(s) => Document::String(s.clone()),
        serde_json::Value::Array(arr) => {
            Document::Array(arr.iter().map(json_to_document).collect())
        }
        serde_json::Value::Object(map) => Document::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_document(v)))
                .collect(),
        ),
    }
}

/// Convert an aws_smithy_types::Document to a serde_json::Value.
pub fn document_to_json(doc: &Document) -> serde_json::Value {
    match doc {
        Document::Null => serde_json::Value::Null,
        Document::Bool(b) => serde_json::Value::Bool(*b),
        Document::Number(n) => match n {
            aws_smithy_types::Number::PosInt(i) => serde_json::json!(*i),
            aws_smithy_types::Number::NegInt(i) => serde_json::json!(*i),
            aws_smithy_types::Number::Float(f) => serde_json::Value::Number(
                serde_json::Number::from_f64(*f).unwrap_or_else(|| serde_json::Number::from(0)),
            ),
        },
        Document::String(s) => serde_json::Value::String(s.clone()),
        Document::Array(arr) => {
            serde_json::Value::Array(arr.iter().map(document_to_json).collect())
        }
        Document::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), document_to_json(v)))
                .collect(),
        ),
    }
}

/// Convert a Bedrock SDK error to a GatewayError.
pub fn convert_converse_error(
    err: &aws_sdk_bedrockruntime::error::SdkError<
        aws_sdk_bedrockruntime::operation::converse::ConverseError,
    >,
) -> GatewayError {
    use aws_sdk_bedrockruntime::error::SdkError;
    use aws_sdk_bedrockruntime::operation::converse::ConverseError;

    match err {
        SdkError::ServiceError(service_err) => match service_err.err() {
            ConverseError::ThrottlingException(e) => {
                GatewayError::RateLimited(format!("Bedrock throttled: {}", e))
            }
            ConverseError::ModelNotReadyException(e) => {
                GatewayError::ModelNotAvailable(format!("Bedrock model not ready: {}", e))
            }
            ConverseError::ResourceNotFoundException(e) => {
                GatewayError::ModelNotAvailable(format!("Bedrock model not found: {}", e))
            }
            ConverseError::ValidationException(e) => {
                GatewayError::InvalidRequest(format!("Bedrock validation error: {}", e))
            }
            ConverseError::AccessDeniedException(e) => {
                GatewayError::Connection(format!("Bedrock access denied: {}", e))
            }
            ConverseError::ModelTimeoutException(_) => GatewayError::Timeout,
            other => GatewayError::ServerError(format!("Bedrock error: {:?}", other)),
        },
        SdkError::TimeoutError(_) => GatewayError::Timeout,
        other => GatewayError::Connection(format!("Bedrock SDK error: {}", other)),
    }
}

//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Definition of a tool the agent may call.
///
/// Serialized into the transport's tool catalogue via
/// [`to_schema_json`](Self::to_schema_json); the model only ever sees the
/// name, description, and JSON input schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "run_command")
    pub name: String,
    /// Human-readable description, shown to the model
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// JSON Schema type ("string", "number", "boolean")
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Build the JSON Schema object for this tool's input.
    pub fn input_schema(&self) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for param in &self.parameters {
            properties.insert(
                param.name.clone(),
                serde_json::json!({
                    "type": param.param_type,
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(serde_json::Value::String(param.name.clone()));
            }
        }
        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// The transport catalogue entry: `{name, description, input_schema}`.
    pub fn to_schema_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "input_schema": self.input_schema(),
        })
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }
}

/// A call to a tool with arguments.
///
/// The `id` is the transport-assigned tool_use id; the tool_result that
/// answers this call is correlated back through it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Transport-assigned tool_use id (e.g. "toolu_abc123"). Empty for
    /// locally constructed calls that never touch the conversation.
    #[serde(default)]
    pub id: String,
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    /// Build a call from a tool_use content block.
    pub fn from_tool_use(
        id: impl Into<String>,
        name: impl Into<String>,
        input: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            id: id.into(),
            tool_name: name.into(),
            arguments: input,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }

    /// Get an optional i64 argument
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.arguments.get(key).and_then(|v| v.as_i64())
    }

    /// Get an optional bool argument
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.arguments.get(key).and_then(|v| v.as_bool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition_schema() {
        let tool = ToolDefinition::new("run_command", "Execute a shell command")
            .with_parameter(ToolParameter::new("command", "The command to execute", true))
            .with_parameter(
                ToolParameter::new("timeout_secs", "Timeout in seconds", false)
                    .with_type("number"),
            );

        let schema = tool.input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["command"]["type"], "string");
        assert_eq!(schema["properties"]["timeout_secs"]["type"], "number");
        assert_eq!(schema["required"], serde_json::json!(["command"]));
    }

    #[test]
    fn test_schema_json_shape() {
        let tool = ToolDefinition::new("read_file", "Read file contents")
            .with_parameter(ToolParameter::new("path", "File path to read", true));

        let entry = tool.to_schema_json();
        assert_eq!(entry["name"], "read_file");
        assert_eq!(entry["description"], "Read file contents");
        assert!(entry["input_schema"]["properties"]["path"].is_object());
    }

    #[test]
    fn test_tool_call() {
        let call = ToolCall::new("read_file").with_arg("path", "/test/file.txt");

        assert_eq!(call.tool_name, "read_file");
        assert_eq!(call.get_string("path"), Some("/test/file.txt"));
        assert_eq!(call.require_string("path").unwrap(), "/test/file.txt");
        assert!(call.require_string("missing").is_err());
    }

    #[test]
    fn test_tool_call_from_tool_use() {
        let input: HashMap<String, serde_json::Value> =
            [("replicas".to_string(), serde_json::json!(3))]
                .into_iter()
                .collect();
        let call = ToolCall::from_tool_use("toolu_1", "kubectl_scale", input);

        assert_eq!(call.id, "toolu_1");
        assert_eq!(call.tool_name, "kubectl_scale");
        assert_eq!(call.get_i64("replicas"), Some(3));
    }
}

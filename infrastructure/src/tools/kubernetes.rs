//! Kubernetes tool provider: structured wrappers over `kubectl`.
//!
//! Arguments are passed as separate argv entries, never through a shell,
//! and resource names are validated so a model cannot smuggle flags like
//! `--all` through a name parameter. Mass deletion is unrepresentable
//! here; only single named resources can be deleted.

use async_trait::async_trait;
use steward_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    provider::{ProviderError, ToolProvider},
    value_objects::{ToolError, ToolResult},
};

use super::cli::{cap_lines, is_command_available, run_cli};

/// Registration priority for the kubernetes provider
pub const KUBERNETES_PRIORITY: i32 = 50;

/// Tool name constants
pub const KUBECTL_GET: &str = "kubectl_get";
pub const KUBECTL_DESCRIBE: &str = "kubectl_describe";
pub const KUBECTL_LOGS: &str = "kubectl_logs";
pub const KUBECTL_SCALE: &str = "kubectl_scale";
pub const KUBECTL_ROLLOUT_RESTART: &str = "kubectl_rollout_restart";
pub const KUBECTL_DELETE: &str = "kubectl_delete";

/// Default number of log lines for kubectl_logs
const DEFAULT_LOG_TAIL: i64 = 100;

/// Maximum lines returned to the conversation from any kubectl call
const MAX_OUTPUT_LINES: usize = 500;

const OUTPUT_FORMATS: &[&str] = &["wide", "yaml", "json", "name"];

/// Provider wrapping the `kubectl` binary.
pub struct KubernetesToolProvider;

impl KubernetesToolProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KubernetesToolProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolProvider for KubernetesToolProvider {
    fn id(&self) -> &str {
        "kubernetes"
    }

    fn display_name(&self) -> &str {
        "Kubernetes (kubectl)"
    }

    fn priority(&self) -> i32 {
        KUBERNETES_PRIORITY
    }

    async fn is_available(&self) -> bool {
        is_command_available("kubectl")
    }

    async fn discover_tools(&self) -> Result<Vec<ToolDefinition>, ProviderError> {
        if !self.is_available().await {
            return Err(ProviderError::NotAvailable(
                "kubectl is not installed or not on PATH".to_string(),
            ));
        }
        Ok(definitions())
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let args = match build_args(call) {
            Ok(Some(args)) => args,
            Ok(None) => {
                return ToolResult::failure(
                    &call.tool_name,
                    ToolError::unknown_tool(&call.tool_name),
                );
            }
            Err(message) => {
                return ToolResult::failure(&call.tool_name, ToolError::invalid_argument(message));
            }
        };

        cap_output(run_cli(&call.tool_name, "kubectl", &args))
    }
}

fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            KUBECTL_GET,
            "List or get Kubernetes resources (pods, deployments, services, ...).",
        )
        .with_parameter(ToolParameter::new(
            "resource",
            "Resource type, e.g. 'pods' or 'deployments'",
            true,
        ))
        .with_parameter(ToolParameter::new("name", "Specific resource name", false))
        .with_parameter(ToolParameter::new("namespace", "Namespace to query", false))
        .with_parameter(ToolParameter::new(
            "output",
            "Output format: wide, yaml, json, or name",
            false,
        ))
        .with_parameter(
            ToolParameter::new("all_namespaces", "Query across all namespaces", false)
                .with_type("boolean"),
        ),
        ToolDefinition::new(KUBECTL_DESCRIBE, "Show detailed state of a named resource.")
            .with_parameter(ToolParameter::new("resource", "Resource type", true))
            .with_parameter(ToolParameter::new("name", "Resource name", true))
            .with_parameter(ToolParameter::new("namespace", "Namespace", false)),
        ToolDefinition::new(KUBECTL_LOGS, "Fetch logs from a pod.")
            .with_parameter(ToolParameter::new("pod", "Pod name", true))
            .with_parameter(ToolParameter::new("namespace", "Namespace", false))
            .with_parameter(ToolParameter::new("container", "Container name", false))
            .with_parameter(
                ToolParameter::new("tail", "Number of trailing lines (default: 100)", false)
                    .with_type("number"),
            )
            .with_parameter(
                ToolParameter::new(
                    "previous",
                    "Logs from the previous container instance",
                    false,
                )
                .with_type("boolean"),
            ),
        ToolDefinition::new(
            KUBECTL_SCALE,
            "Scale a workload, e.g. resource 'deployment/api' to N replicas.",
        )
        .with_parameter(ToolParameter::new(
            "resource",
            "Workload reference, e.g. 'deployment/api'",
            true,
        ))
        .with_parameter(
            ToolParameter::new("replicas", "Desired replica count", true).with_type("number"),
        )
        .with_parameter(ToolParameter::new("namespace", "Namespace", false)),
        ToolDefinition::new(
            KUBECTL_ROLLOUT_RESTART,
            "Trigger a rolling restart of a workload.",
        )
        .with_parameter(ToolParameter::new(
            "resource",
            "Workload reference, e.g. 'deployment/api'",
            true,
        ))
        .with_parameter(ToolParameter::new("namespace", "Namespace", false)),
        ToolDefinition::new(
            KUBECTL_DELETE,
            "Delete one named resource. Deleting by label or --all is not supported.",
        )
        .with_parameter(ToolParameter::new("resource", "Resource type", true))
        .with_parameter(ToolParameter::new("name", "Resource name", true))
        .with_parameter(ToolParameter::new("namespace", "Namespace", false)),
    ]
}

/// Build the kubectl argv for a call. `Ok(None)` means the tool name is
/// not one of ours.
fn build_args(call: &ToolCall) -> Result<Option<Vec<String>>, String> {
    let args = match call.tool_name.as_str() {
        KUBECTL_GET => build_get_args(call)?,
        KUBECTL_DESCRIBE => build_describe_args(call)?,
        KUBECTL_LOGS => build_logs_args(call)?,
        KUBECTL_SCALE => build_scale_args(call)?,
        KUBECTL_ROLLOUT_RESTART => build_rollout_restart_args(call)?,
        KUBECTL_DELETE => build_delete_args(call)?,
        _ => return Ok(None),
    };
    Ok(Some(args))
}

fn build_get_args(call: &ToolCall) -> Result<Vec<String>, String> {
    let resource = require_identifier(call, "resource")?;
    let mut args = vec!["get".to_string(), resource];

    if let Some(name) = call.get_string("name") {
        args.push(checked_identifier(name, "name")?);
    }
    if call.get_bool("all_namespaces").unwrap_or(false) {
        args.push("--all-namespaces".to_string());
    } else if let Some(ns) = call.get_string("namespace") {
        args.push("-n".to_string());
        args.push(checked_identifier(ns, "namespace")?);
    }
    if let Some(output) = call.get_string("output") {
        if !OUTPUT_FORMATS.contains(&output) {
            return Err(format!(
                "Invalid output format '{}' (expected one of: {})",
                output,
                OUTPUT_FORMATS.join(", ")
            ));
        }
        args.push("-o".to_string());
        args.push(output.to_string());
    }
    Ok(args)
}

fn build_describe_args(call: &ToolCall) -> Result<Vec<String>, String> {
    let resource = require_identifier(call, "resource")?;
    let name = require_identifier(call, "name")?;
    let mut args = vec!["describe".to_string(), resource, name];
    push_namespace(&mut args, call)?;
    Ok(args)
}

fn build_logs_args(call: &ToolCall) -> Result<Vec<String>, String> {
    let pod = require_identifier(call, "pod")?;
    let tail = call.get_i64("tail").unwrap_or(DEFAULT_LOG_TAIL).max(1);

    let mut args = vec!["logs".to_string(), pod, format!("--tail={}", tail)];
    if let Some(container) = call.get_string("container") {
        args.push("-c".to_string());
        args.push(checked_identifier(container, "container")?);
    }
    if call.get_bool("previous").unwrap_or(false) {
        args.push("--previous".to_string());
    }
    push_namespace(&mut args, call)?;
    Ok(args)
}

fn build_scale_args(call: &ToolCall) -> Result<Vec<String>, String> {
    let resource = require_identifier(call, "resource")?;
    let replicas = call
        .get_i64("replicas")
        .ok_or("Missing required argument: replicas")?;
    if replicas < 0 {
        return Err(format!("Replica count must be non-negative, got {}", replicas));
    }

    let mut args = vec![
        "scale".to_string(),
        resource,
        format!("--replicas={}", replicas),
    ];
    push_namespace(&mut args, call)?;
    Ok(args)
}

fn build_rollout_restart_args(call: &ToolCall) -> Result<Vec<String>, String> {
    let resource = require_identifier(call, "resource")?;
    let mut args = vec!["rollout".to_string(), "restart".to_string(), resource];
    push_namespace(&mut args, call)?;
    Ok(args)
}

fn build_delete_args(call: &ToolCall) -> Result<Vec<String>, String> {
    let resource = require_identifier(call, "resource")?;
    let name = require_identifier(call, "name")?;
    let mut args = vec!["delete".to_string(), resource, name];
    push_namespace(&mut args, call)?;
    Ok(args)
}

fn push_namespace(args: &mut Vec<String>, call: &ToolCall) -> Result<(), String> {
    if let Some(ns) = call.get_string("namespace") {
        args.push("-n".to_string());
        args.push(checked_identifier(ns, "namespace")?);
    }
    Ok(())
}

fn require_identifier(call: &ToolCall, key: &str) -> Result<String, String> {
    let value = call.require_string(key)?;
    checked_identifier(value, key)
}

/// Reject empty values and anything that parses as a flag.
fn checked_identifier(value: &str, what: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err(format!("Argument '{}' must not be empty", what));
    }
    if value.starts_with('-') {
        return Err(format!(
            "Argument '{}' must not start with '-': '{}'",
            what, value
        ));
    }
    Ok(value.to_string())
}

fn cap_output(mut result: ToolResult) -> ToolResult {
    if let Some(output) = result.output.take() {
        result.output = Some(cap_lines(&output, MAX_OUTPUT_LINES));
    }
    result
}

//! Bedrock model ID mapping
//!
//! Maps domain `Model` variants to Bedrock model identifiers,
//! with optional cross-region inference prefix.

use steward_domain::Model;

/// Convert a domain Model to a Bedrock model ID string.
///
/// - Models that require inference profiles (e.g. Claude 4.6) always use
///   the region-group prefix (`us.`, `eu.`, etc.) regardless of `cross_region`.
/// - When `cross_region` is true, other models are prefixed with `"{region}."`.
/// - `Custom` ids pass through untouched; the operator manages the full form.
pub fn to_bedrock_model_id(model: &Model, cross_region: bool, region: &str) -> String {
    let base_id = match model {
        Model::ClaudeSonnet46 => "anthropic.claude-sonnet-4-6",
        Model::ClaudeOpus46 => "anthropic.claude-opus-4-6-v1",
        Model::ClaudeSonnet45 => "anthropic.claude-sonnet-4-5-20250929-v1:0",
        Model::ClaudeHaiku45 => "anthropic.claude-haiku-4-5-20250929-v1:0",
        Model::Custom(id) => return id.clone(),
    };

    if requires_inference_profile(model) {
        // Models that don't support on-demand throughput must use inference profiles
        let prefix = inference_profile_prefix(region);
        format!("{prefix}.{base_id}")
    } else if cross_region {
        format!("{region}.{base_id}")
    } else {
        base_id.to_string()
    }
}

/// Whether a model requires an inference profile (cannot use on-demand throughput).
fn requires_inference_profile(model: &Model) -> bool {
    matches!(model, Model::ClaudeSonnet46 | Model::ClaudeOpus46)
}

/// Derive the inference profile region group from an AWS region string.
///
/// Cross-region inference profiles use continent-level prefixes:
/// `us-east-1` → `us`, `eu-west-1` → `eu`, `ap-northeast-1` → `ap`, etc.
fn inference_profile_prefix(region: &str) -> &str {
    match region.split('-').next() {
        Some(prefix @ ("us" | "eu" | "ap" | "me" | "sa" | "ca" | "af")) => prefix,
        _ => "us", // safe fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claude_sonnet46_uses_inference_profile() {
        // 4.6 models always require inference profiles, even with cross_region=false
        let id = to_bedrock_model_id(&Model::ClaudeSonnet46, false, "us-east-1");
        assert_eq!(id, "us.anthropic.claude-sonnet-4-6");
    }

    #[test]
    fn test_claude_opus46_uses_inference_profile() {
        let id = to_bedrock_model_id(&Model::ClaudeOpus46, false, "us-east-1");
        assert_eq!(id, "us.anthropic.claude-opus-4-6-v1");
    }

    #[test]
    fn test_claude_sonnet46_eu_region() {
        let id = to_bedrock_model_id(&Model::ClaudeSonnet46, false, "eu-west-1");
        assert_eq!(id, "eu.anthropic.claude-sonnet-4-6");
    }

    #[test]
    fn test_claude_opus46_ap_region() {
        let id = to_bedrock_model_id(&Model::ClaudeOpus46, false, "ap-northeast-1");
        assert_eq!(id, "ap.anthropic.claude-opus-4-6-v1");
    }

    #[test]
    fn test_claude_sonnet45_mapping() {
        let id = to_bedrock_model_id(&Model::ClaudeSonnet45, false, "us-east-1");
        assert_eq!(id, "anthropic.claude-sonnet-4-5-20250929-v1:0");
    }

    #[test]
    fn test_claude_haiku45_mapping() {
        let id = to_bedrock_model_id(&Model::ClaudeHaiku45, false, "us-east-1");
        assert_eq!(id, "anthropic.claude-haiku-4-5-20250929-v1:0");
    }

    #[test]
    fn test_cross_region_prefix() {
        let id = to_bedrock_model_id(&Model::ClaudeSonnet45, true, "us-west-2");
        assert_eq!(id, "us-west-2.anthropic.claude-sonnet-4-5-20250929-v1:0");
    }

    #[test]
    fn test_unknown_region_group_falls_back_to_us() {
        let id = to_bedrock_model_id(&Model::ClaudeSonnet46, false, "il-central-1");
        assert_eq!(id, "us.anthropic.claude-sonnet-4-6");
    }

    #[test]
    fn test_custom_model_passthrough() {
        let model = Model::Custom("my-fine-tuned-model".to_string());
        let id = to_bedrock_model_id(&model, false, "us-east-1");
        assert_eq!(id, "my-fine-tuned-model");
    }

    #[test]
    fn test_custom_model_ignores_cross_region() {
        let model = Model::Custom("my-model".to_string());
        let id = to_bedrock_model_id(&model, true, "us-west-2");
        // Custom models are passed through as-is (user manages the full ID)
        assert_eq!(id, "my-model");
    }
}

//! System prompt templates for the agent loop

/// Caller-supplied preference context, rendered into the system prompt.
///
/// All fields are optional; an empty context yields the bare persona
/// prompt. This is plain string templating, not part of the hard core.
#[derive(Debug, Clone, Default)]
pub struct PreferenceContext {
    /// Preferred cloud provider for unqualified requests ("aws", "gcp")
    pub cloud_provider: Option<String>,
    /// Response style ("terse", "detailed")
    pub response_style: Option<String>,
    /// Named environments the user works with, e.g. "staging", "prod-eu"
    pub environments: Vec<String>,
}

impl PreferenceContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cloud_provider(mut self, provider: impl Into<String>) -> Self {
        self.cloud_provider = Some(provider.into());
        self
    }

    pub fn with_response_style(mut self, style: impl Into<String>) -> Self {
        self.response_style = Some(style.into());
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environments.push(environment.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cloud_provider.is_none()
            && self.response_style.is_none()
            && self.environments.is_empty()
    }
}

/// Templates for the agent's system prompt
pub struct SystemPrompt;

impl SystemPrompt {
    /// The operational persona: a careful assistant that checks state
    /// before mutating it and defers destructive calls to the human.
    pub fn devops() -> &'static str {
        r#"You are a careful DevOps assistant with access to operational tools.

Guidelines:
- Prefer read-only checks (get, describe, status, logs) before any mutating action.
- State clearly which tool you are about to use and why.
- Never attempt destructive operations; they are refused by policy and you should propose a safer alternative instead.
- When a command fails, report the failure plainly and suggest the next diagnostic step.
- Keep answers operational: what was found, what was done, what to watch."#
    }

    /// Persona plus a rendered preferences section when the context
    /// carries any. An empty context returns the persona alone.
    pub fn with_preferences(context: &PreferenceContext) -> String {
        if context.is_empty() {
            return Self::devops().to_string();
        }

        let mut prompt = format!("{}\n\nUser preferences:\n", Self::devops());
        if let Some(provider) = &context.cloud_provider {
            prompt.push_str(&format!(
                "- Default cloud provider: {} (assume it when a request names none)\n",
                provider
            ));
        }
        if let Some(style) = &context.response_style {
            prompt.push_str(&format!("- Response style: {}\n", style));
        }
        if !context.environments.is_empty() {
            prompt.push_str(&format!(
                "- Known environments: {}\n",
                context.environments.join(", ")
            ));
        }
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devops_prompt_mentions_tools_and_caution() {
        let prompt = SystemPrompt::devops();
        assert!(prompt.contains("DevOps"));
        assert!(prompt.contains("read-only"));
        assert!(prompt.contains("destructive"));
    }

    #[test]
    fn empty_context_yields_persona_only() {
        let prompt = SystemPrompt::with_preferences(&PreferenceContext::new());
        assert_eq!(prompt, SystemPrompt::devops());
    }

    #[test]
    fn preferences_are_rendered() {
        let context = PreferenceContext::new()
            .with_cloud_provider("aws")
            .with_response_style("terse")
            .with_environment("staging")
            .with_environment("prod-eu");

        let prompt = SystemPrompt::with_preferences(&context);
        assert!(prompt.contains("Default cloud provider: aws"));
        assert!(prompt.contains("Response style: terse"));
        assert!(prompt.contains("staging, prod-eu"));
        assert!(prompt.starts_with(SystemPrompt::devops()));
    }
}

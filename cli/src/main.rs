//! CLI entrypoint for steward
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use steward_application::ports::llm_gateway::LlmGateway;
use steward_application::ports::progress::{NoProgress, ProgressNotifier};
use steward_application::{AgentOrchestrator, ConversationLogger};
use steward_domain::SafetyValidator;
use steward_infrastructure::{
    AnthropicGateway, BuiltinToolProvider, ConfigLoader, FileConfig, GitToolProvider,
    JsonlConversationLogger, KubernetesToolProvider, RoutingGateway, ToolRegistry,
};
#[cfg(feature = "bedrock")]
use steward_infrastructure::BedrockGateway;
use steward_presentation::{ChatRepl, Cli, SimpleProgress, SpinnerProgress};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the appender worker alive for the whole run
    let _log_guard = init_logging(&cli);

    // Figment silently skips missing files; an explicit --config that does
    // not exist is an operator mistake and fails loudly instead.
    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Invalid configuration: {e}"))?
    };

    // --model overrides whatever the config files picked
    if let Some(model) = &cli.model {
        config.agent.model = Some(model.clone());
    }

    for issue in config.validate() {
        warn!("{}", issue);
    }

    if cli.show_config {
        show_config(&config)?;
        return Ok(());
    }

    // === Dependency Injection ===
    let (policy, _) = config.safety.to_policy();
    let validator = SafetyValidator::new(policy);

    let mut registry = build_registry(&config, validator.clone());
    registry.discover().await.map_err(|e| anyhow!(e))?;

    if cli.list_tools {
        list_tools(&registry);
        return Ok(());
    }

    let gateway = build_gateway(&config).await?;
    let params = config.agent.to_agent_params();
    let model_name = params.model.to_string();

    let mut orchestrator =
        AgentOrchestrator::new(gateway, Arc::new(registry), validator, params);
    if let Some(logger) = transcript_logger() {
        orchestrator = orchestrator.with_conversation_logger(logger);
    }

    info!("Starting steward");

    // Chat mode
    if cli.wants_chat() {
        let mut repl =
            ChatRepl::new(orchestrator, model_name).with_progress(progress_for(&cli));
        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match &cli.question {
        Some(q) => q,
        None => bail!("A question is required. Use --chat for interactive mode."),
    };

    let progress = progress_for(&cli);
    let answer = orchestrator.process_message(question, progress.as_ref()).await;
    println!("{}", answer);

    Ok(())
}

/// Initialize diagnostics logging from the verbosity flags.
///
/// `STEWARD_LOG_DIR` routes diagnostics to a daily-rotated file in that
/// directory; otherwise they go to stderr so they never mix with the
/// conversation on stdout.
fn init_logging(cli: &Cli) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else {
        match cli.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"), // -vvv or more
        }
    };

    if let Some(dir) = std::env::var_os("STEWARD_LOG_DIR") {
        let appender = tracing_appender::rolling::daily(dir, "steward.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .init();
        return Some(guard);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    None
}

/// Register the tool provider groups enabled in `[tools]`.
fn build_registry(config: &FileConfig, validator: SafetyValidator) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    if config.tools.builtin.enabled {
        let mut builtin = BuiltinToolProvider::new(validator);
        if let Some(dir) = &config.tools.working_dir {
            builtin = builtin.with_working_dir(dir);
        }
        registry = registry.register(builtin);
    }
    if config.tools.kubernetes.enabled {
        registry = registry.register(KubernetesToolProvider::new());
    }
    if config.tools.git.enabled {
        registry = registry.register(GitToolProvider::new());
    }

    registry
}

/// Build the LLM gateway from every provider that has credentials.
async fn build_gateway(config: &FileConfig) -> Result<Arc<dyn LlmGateway>> {
    let mut providers: Vec<Arc<dyn LlmGateway>> = Vec::new();

    if let Some(gateway) = AnthropicGateway::try_new(&config.providers.anthropic) {
        providers.push(Arc::new(gateway));
    }

    #[cfg(feature = "bedrock")]
    if let Some(gateway) = BedrockGateway::try_new(&config.providers.bedrock).await {
        providers.push(Arc::new(gateway));
    }

    match providers.len() {
        0 => bail!(
            "No LLM provider available. Set {} or configure AWS credentials \
             for the bedrock provider.",
            config.providers.anthropic.api_key_env
        ),
        1 => Ok(providers.remove(0)),
        _ => Ok(Arc::new(RoutingGateway::new(providers, &config.providers))),
    }
}

/// JSONL transcript logger, enabled by `STEWARD_TRANSCRIPT=<path>`.
fn transcript_logger() -> Option<Arc<dyn ConversationLogger>> {
    let path = std::env::var_os("STEWARD_TRANSCRIPT")?;
    JsonlConversationLogger::new(path).map(|logger| Arc::new(logger) as Arc<dyn ConversationLogger>)
}

/// Pick a progress renderer for the terminal we are actually on.
fn progress_for(cli: &Cli) -> Box<dyn ProgressNotifier> {
    if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stdout().is_terminal() {
        Box::new(SpinnerProgress::new())
    } else {
        Box::new(SimpleProgress)
    }
}

fn show_config(config: &FileConfig) -> Result<()> {
    ConfigLoader::print_config_sources();
    println!();
    println!("Effective configuration:");
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn list_tools(registry: &ToolRegistry) {
    use steward_application::ToolExecutorPort;

    let stats = registry.stats();
    println!(
        "{} tools from {} providers:",
        stats.total_tools, stats.total_providers
    );
    for definition in registry.tool_definitions() {
        let provider = registry.provider_id_for(&definition.name).unwrap_or("?");
        println!(
            "  {:<20} [{}] {}",
            definition.name, provider, definition.description
        );
    }
}

//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for steward
#[derive(Parser, Debug)]
#[command(name = "steward")]
#[command(version, about = "Conversational DevOps assistant with safety-validated tools")]
#[command(long_about = r#"
Steward answers operations questions by driving Claude through an agentic
loop: the model inspects your environment with registered tools (kubectl,
git, shell, files), every call passes a safety validator first, and the
final answer is printed to the console.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./steward.toml or ./.steward.toml   Project-level config
3. ~/.config/steward/config.toml       Global config

Example:
  steward "why is the payments pod crash-looping?"
  steward --model claude-haiku-4.5 "summarize recent git changes"
  steward --chat
"#)]
pub struct Cli {
    /// The question to ask (omit to start chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Model to use (e.g. claude-sonnet-4.6, claude-haiku-4.5)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and effective values, then exit
    #[arg(long)]
    pub show_config: bool,

    /// List available tools and exit
    #[arg(long)]
    pub list_tools: bool,
}

impl Cli {
    /// Chat mode is entered explicitly or by omitting the question.
    pub fn wants_chat(&self) -> bool {
        self.chat || self.question.is_none()
    }
}

//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::output::Console;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use steward_application::ports::progress::{NoProgress, ProgressNotifier};
use steward_application::AgentOrchestrator;

/// Lines of input kept in the history file.
const HISTORY_CAPACITY: usize = 500;

const DEFAULT_EXPORT_PATH: &str = "steward-conversation.json";

/// A parsed slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Help,
    Clear,
    Summary,
    Tools,
    Export(Option<PathBuf>),
    Quit,
    Unknown(String),
}

impl ReplCommand {
    fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        match parts.next().unwrap_or("") {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/clear" => ReplCommand::Clear,
            "/summary" => ReplCommand::Summary,
            "/tools" => ReplCommand::Tools,
            "/export" => ReplCommand::Export(parts.next().map(PathBuf::from)),
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            other => ReplCommand::Unknown(other.to_string()),
        }
    }
}

/// Interactive chat REPL driving one agent conversation.
pub struct ChatRepl {
    orchestrator: AgentOrchestrator,
    progress: Box<dyn ProgressNotifier>,
    model_name: String,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    pub fn new(orchestrator: AgentOrchestrator, model_name: impl Into<String>) -> Self {
        Self {
            orchestrator,
            progress: Box::new(NoProgress),
            model_name: model_name.into(),
            history_file: default_history_path(),
        }
    }

    /// Set the progress notifier used while a turn runs.
    pub fn with_progress(mut self, progress: Box<dyn ProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }

    /// Override the history file location (`None` disables history).
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL until `/quit` or Ctrl-D.
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = self.build_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("steward".to_string()),
            DefaultPromptSegment::Empty,
        );

        print!(
            "{}",
            Console::banner(
                &self.model_name,
                self.orchestrator.list_available_tools().len()
            )
        );

        loop {
            match line_editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    let answer = self
                        .orchestrator
                        .process_message(line, self.progress.as_ref())
                        .await;
                    print!("{}", Console::assistant_reply(&answer));
                }
                Ok(Signal::CtrlC) => {
                    // Cancel the current line, keep the session
                    println!("^C");
                    continue;
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("{}", Console::error_line(&err.to_string()));
                    break;
                }
            }
        }

        let _ = line_editor.sync_history();
        Ok(())
    }

    fn build_editor(&self) -> Reedline {
        let mut editor = Reedline::create();
        if let Some(path) = &self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => eprintln!(
                    "{}",
                    Console::error_line(&format!("could not open history file: {e}"))
                ),
            }
        }
        editor
    }

    /// Handle a slash command. Returns true if the REPL should exit.
    fn handle_command(&mut self, line: &str) -> bool {
        match ReplCommand::parse(line) {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                print!("{}", Console::help());
                false
            }
            ReplCommand::Clear => {
                let diagnostics = self.orchestrator.reset_conversation_with_diagnostics();
                print!("{}", Console::reset_diagnostics(&diagnostics));
                false
            }
            ReplCommand::Summary => {
                print!(
                    "{}",
                    Console::summary(&self.orchestrator.conversation_summary())
                );
                false
            }
            ReplCommand::Tools => {
                print!(
                    "{}",
                    Console::tool_list(&self.orchestrator.list_available_tools())
                );
                false
            }
            ReplCommand::Export(path) => {
                self.export(path);
                false
            }
            ReplCommand::Unknown(command) => {
                println!("Unknown command: {}", command);
                println!("Type /help for available commands");
                false
            }
        }
    }

    fn export(&self, path: Option<PathBuf>) {
        let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH));
        let messages = self.orchestrator.export_conversation();
        match serde_json::to_string_pretty(&messages) {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(()) => println!("Exported {} messages to {}", messages.len(), path.display()),
                Err(e) => eprintln!(
                    "{}",
                    Console::error_line(&format!("could not write {}: {e}", path.display()))
                ),
            },
            Err(e) => eprintln!("{}", Console::error_line(&e.to_string())),
        }
    }
}

fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("steward").join("history.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use steward_application::config::AgentParams;
    use steward_application::ports::llm_gateway::{ChatRequest, GatewayError, LlmGateway};
    use steward_application::ports::tool_executor::ToolExecutorPort;
    use steward_domain::{
        LlmReply, SafetyPolicy, SafetyValidator, ToolCall, ToolDefinition, ToolResult,
    };

    struct CannedGateway;

    #[async_trait]
    impl LlmGateway for CannedGateway {
        fn name(&self) -> &str {
            "canned"
        }

        async fn send(&self, _request: ChatRequest) -> Result<LlmReply, GatewayError> {
            Ok(LlmReply::from_text("ok"))
        }
    }

    struct TwoToolExecutor;

    #[async_trait]
    impl ToolExecutorPort for TwoToolExecutor {
        fn tool_definitions(&self) -> Vec<ToolDefinition> {
            vec![
                ToolDefinition::new("run_command", "Run a shell command"),
                ToolDefinition::new("kubectl_get", "List cluster resources"),
            ]
        }

        async fn execute(&self, call: &ToolCall) -> ToolResult {
            ToolResult::success(&call.tool_name, "ok")
        }
    }

    fn repl() -> ChatRepl {
        let orchestrator = AgentOrchestrator::new(
            Arc::new(CannedGateway),
            Arc::new(TwoToolExecutor),
            SafetyValidator::new(SafetyPolicy::default()),
            AgentParams::default(),
        );
        ChatRepl::new(orchestrator, "claude-sonnet-4.6").with_history_file(None)
    }

    #[test]
    fn parses_slash_commands() {
        assert_eq!(ReplCommand::parse("/help"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("/h"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("/clear"), ReplCommand::Clear);
        assert_eq!(ReplCommand::parse("/summary"), ReplCommand::Summary);
        assert_eq!(ReplCommand::parse("/tools"), ReplCommand::Tools);
        assert_eq!(ReplCommand::parse("/quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/q"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/export"), ReplCommand::Export(None));
        assert_eq!(
            ReplCommand::parse("/export /tmp/out.json"),
            ReplCommand::Export(Some(PathBuf::from("/tmp/out.json")))
        );
        assert_eq!(
            ReplCommand::parse("/frobnicate"),
            ReplCommand::Unknown("/frobnicate".to_string())
        );
    }

    #[test]
    fn quit_exits_other_commands_do_not() {
        let mut repl = repl();
        assert!(repl.handle_command("/quit"));
        assert!(!repl.handle_command("/help"));
        assert!(!repl.handle_command("/summary"));
        assert!(!repl.handle_command("/tools"));
        assert!(!repl.handle_command("/clear"));
        assert!(!repl.handle_command("/nonsense"));
    }

    #[tokio::test]
    async fn export_writes_conversation_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mut repl = repl();
        repl.orchestrator.process_message("hello", &NoProgress).await;
        repl.export(Some(path.clone()));

        let content = std::fs::read_to_string(&path).unwrap();
        let exported: serde_json::Value = serde_json::from_str(&content).unwrap();
        let messages = exported.as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "hello");
        assert_eq!(messages[1]["role"], "assistant");
    }

    #[test]
    fn clear_resets_history() {
        let mut repl = repl();
        assert!(!repl.handle_command("/clear"));
        assert_eq!(repl.orchestrator.conversation_summary().total_messages, 0);
    }

    #[test]
    fn default_history_lives_under_data_dir() {
        if let Some(path) = default_history_path() {
            assert!(path.ends_with("steward/history.txt"));
        }
    }
}

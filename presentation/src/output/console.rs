//! Console rendering for the chat session

use colored::Colorize;
use steward_domain::{ConversationDiagnostics, ConversationSummary};

/// Renders chat output for the terminal.
///
/// Pure string builders; the REPL decides when to print.
pub struct Console;

impl Console {
    /// Welcome banner shown when the REPL starts.
    pub fn banner(model: &str, tool_count: usize) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str("│              steward — chat mode            │\n");
        output.push_str("╰─────────────────────────────────────────────╯\n");
        output.push('\n');
        output.push_str(&format!(
            "{} {}   {} {} available\n",
            "Model:".cyan().bold(),
            model,
            "Tools:".cyan().bold(),
            tool_count
        ));
        output.push_str(&format!(
            "Type {} for commands, Ctrl-D to exit.\n",
            "/help".bold()
        ));
        output
    }

    /// The assistant's reply with a marker line.
    pub fn assistant_reply(text: &str) -> String {
        format!("\n{}\n{}\n", "steward".cyan().bold(), Self::indent(text, "  "))
    }

    /// An error the user should see. Printed, never panicked.
    pub fn error_line(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    /// Slash command reference.
    pub fn help() -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("Commands:\n");
        output.push_str("  /help           - Show this help\n");
        output.push_str("  /clear          - Reset conversation history\n");
        output.push_str("  /summary        - Show conversation statistics\n");
        output.push_str("  /tools          - List available tools\n");
        output.push_str("  /export [path]  - Write the conversation to a JSON file\n");
        output.push_str("  /quit           - Exit chat\n");
        output
    }

    /// Conversation statistics for `/summary`.
    pub fn summary(summary: &ConversationSummary) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&format!("{}\n", "Conversation summary".cyan().bold()));
        output.push_str(&format!(
            "  Messages: {} ({} user / {} assistant)\n",
            summary.total_messages, summary.user_messages, summary.assistant_messages
        ));
        output.push_str(&format!(
            "  Session length: {}\n",
            Self::duration(summary.session_duration_seconds)
        ));
        output
    }

    /// Post-reset display for `/clear`.
    pub fn reset_diagnostics(diagnostics: &ConversationDiagnostics) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "History cleared ({} messages dropped).\n",
            diagnostics.role_sequence.len()
        ));
        output.push_str(&format!(
            "  Tool blocks: {} tool_use / {} tool_result\n",
            diagnostics.tool_use_blocks, diagnostics.tool_result_blocks
        ));
        if diagnostics.tool_use_blocks != diagnostics.tool_result_blocks {
            output.push_str(&format!(
                "  {}\n",
                "warning: unbalanced tool pairing in dropped history".yellow()
            ));
        }
        output
    }

    /// Tool catalogue for `/tools`.
    pub fn tool_list(tools: &[String]) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&format!(
            "{} ({})\n",
            "Available tools".cyan().bold(),
            tools.len()
        ));
        for tool in tools {
            output.push_str(&format!("  - {}\n", tool));
        }
        output
    }

    fn duration(seconds: i64) -> String {
        if seconds >= 60 {
            format!("{}m {}s", seconds / 60, seconds % 60)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

//! Progress reporting for the agent turn

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use steward_application::ports::progress::ProgressNotifier;

/// Spinner-based progress for interactive terminals.
///
/// Shows an indicatif spinner while a model request is in flight and prints
/// one line per tool execution. Assistant text is left to the caller: the
/// REPL prints the returned answer, so rendering it here would double it.
pub struct SpinnerProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for SpinnerProgress {
    fn on_request_start(&self, model: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("thinking ({model})"));
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap() = Some(pb);
    }

    fn on_request_end(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }

    fn on_tool_start(&self, tool_name: &str, args_preview: &str) {
        println!(
            "{} {} {}",
            "->".cyan(),
            format!("running {tool_name}").bold(),
            args_preview.dimmed()
        );
    }

    fn on_tool_finish(&self, tool_name: &str, success: bool, duration_ms: u64) {
        if success {
            println!("   {} {} ({duration_ms}ms)", "v".green(), tool_name);
        } else {
            println!("   {} {} failed ({duration_ms}ms)", "x".red(), tool_name);
        }
    }

    fn on_tool_blocked(&self, tool_name: &str, reason: &str) {
        println!(
            "   {} {} blocked: {}",
            "!".yellow().bold(),
            tool_name,
            reason
        );
    }
}

/// Plain-text progress for non-interactive terminals (no spinner).
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_request_start(&self, model: &str) {
        println!("{} calling {}...", "->".cyan(), model);
    }

    fn on_tool_start(&self, tool_name: &str, _args_preview: &str) {
        println!("{} running {}", "->".cyan(), tool_name);
    }

    fn on_tool_finish(&self, tool_name: &str, success: bool, duration_ms: u64) {
        if success {
            println!("   {} {} ({duration_ms}ms)", "v".green(), tool_name);
        } else {
            println!("   {} {} failed ({duration_ms}ms)", "x".red(), tool_name);
        }
    }

    fn on_tool_blocked(&self, tool_name: &str, reason: &str) {
        println!("   {} {} blocked: {}", "!".yellow(), tool_name, reason);
    }
}

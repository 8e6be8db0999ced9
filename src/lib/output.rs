//! Output sink used to report validation problems to the user.

use std::{
    io::{self, Write},
    sync::Mutex,
};

use colored::Colorize;

use crate::lib::errors::PrettyError;

/// Destination for user-facing messages.
pub trait Output {
    /// Write preformatted text as-is.
    fn print(&self, text: &str);
    /// Render a structured error with its documentation link.
    fn pretty_error(&self, error: &PrettyError);
}

/// Writes messages to stderr, leaving stdout for machine-readable results.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn print(&self, text: &str) {
        let mut stderr = io::stderr().lock();
        let _ = stderr.write_all(text.as_bytes());
        let _ = stderr.flush();
    }

    fn pretty_error(&self, error: &PrettyError) {
        self.print(&render_pretty_error(error));
    }
}

/// Format a structured error the same way for every sink.
pub fn render_pretty_error(error: &PrettyError) -> String {
    format!(
        "{} {}\n{}: {}\n",
        "Error:".red().bold(),
        error.message,
        "Learn More".bold(),
        error.link
    )
}

/// In-memory sink that keeps every message, for tests and embedding.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    lines: Mutex<Vec<String>>,
    errors: Mutex<Vec<PrettyError>>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text passed to `print`, in call order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Structured errors passed to `pretty_error`, in call order.
    pub fn errors(&self) -> Vec<PrettyError> {
        self.errors
            .lock()
            .map(|errors| errors.clone())
            .unwrap_or_default()
    }

    /// Total number of messages of either kind.
    pub fn message_count(&self) -> usize {
        self.lines().len() + self.errors().len()
    }
}

impl Output for RecordingOutput {
    fn print(&self, text: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(text.to_string());
        }
    }

    fn pretty_error(&self, error: &PrettyError) {
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(error.clone());
        }
    }
}

//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion.

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    rows: Vec<(String, String)>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// All captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// All captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// All captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All captured status rows.
    pub fn rows(&self) -> &[(String, String)] {
        &self.rows
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn status_row(&mut self, label: &str, value: &str) {
        self.rows.push((label.to_string(), value.to_string()));
    }
}

//! Colored terminal output on stderr.

use std::fmt::Display;

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    success: Style,
    warning: Style,
    error: Style,
    highlight: Style,
    label: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            highlight: Style::new().cyan().bold(),
            label: Style::new().dim(),
        }
    }

    /// Plain progress line.
    pub(crate) fn info(&self, msg: &str) {
        self.write(msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.write(&self.success.apply_to(msg).to_string());
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.write(&self.warning.apply_to(msg).to_string());
    }

    pub(crate) fn error(&self, msg: &str) {
        self.write(&self.error.apply_to(msg).to_string());
    }

    pub(crate) fn highlight(&self, msg: &str) {
        self.write(&self.highlight.apply_to(msg).to_string());
    }

    /// Indented `label: value` line describing a page.
    pub(crate) fn detail(&self, label: &str, value: impl Display) {
        let label = self.label.apply_to(format!("{label}:"));
        self.write(&format!("  {label} {value}"));
    }

    fn write(&self, line: &str) {
        // Nothing sensible to do if stderr is gone.
        let _ = self.term.write_line(line);
    }
}

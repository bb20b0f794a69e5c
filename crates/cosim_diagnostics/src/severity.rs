//! Diagnostic severity levels.

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a diagnostic affects the run.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// Generation continues but the input looks suspicious.
    Warning,
    /// Generation is aborted and nothing is written.
    Error,
}

impl Severity {
    /// Styles `text` in the colour of this severity.
    pub(crate) fn paint(self, text: &str) -> ColoredString {
        match self {
            Severity::Warning => text.yellow().bold(),
            Severity::Error => text.red().bold(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_outrank_warnings() {
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn paint_uses_severity_colour() {
        colored::control::set_override(true);
        assert_eq!(
            Severity::Error.paint("error").to_string(),
            "error".red().bold().to_string()
        );
        assert_ne!(
            Severity::Warning.paint("x").to_string(),
            Severity::Error.paint("x").to_string()
        );
    }
}

//! Diagnostic codes with category prefixes.
//!
//! Numbers are grouped by pipeline stage: `1xx` stub parsing, `2xx` template
//! rendering, `3xx` simulation directory inspection, `4xx` file system and
//! configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Fatal problems, prefixed with `E`.
    Error,
    /// Suspicious input that does not stop generation, prefixed with `W`.
    Warning,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
        }
    }
}

/// A category prefix plus a three-digit number, displayed as e.g. `E104`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }

    /// Shorthand for an error code.
    pub const fn error(number: u16) -> Self {
        Self::new(Category::Error, number)
    }

    /// Shorthand for a warning code.
    pub const fn warning(number: u16) -> Self {
        Self::new(Category::Warning, number)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        assert_eq!(DiagnosticCode::error(101).to_string(), "E101");
        assert_eq!(DiagnosticCode::warning(7).to_string(), "W007");
    }

    #[test]
    fn shorthands_match_new() {
        assert_eq!(
            DiagnosticCode::error(301),
            DiagnosticCode::new(Category::Error, 301)
        );
    }

    #[test]
    fn serde_roundtrip() {
        let code = DiagnosticCode::warning(201);
        let json = serde_json::to_string(&code).unwrap();
        let back: DiagnosticCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }
}

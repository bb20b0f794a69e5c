//! Errors raised while preparing or writing artifacts.

use cosim_common::InternalError;
use cosim_diagnostics::{Diagnostic, DiagnosticCode};
use cosim_source::Span;
use cosim_template::TemplateError;
use std::path::PathBuf;

/// Errors that stop artifact output.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The simulation directory does not name exactly one elaboration
    /// script to take the design name from.
    #[error("expected exactly one `<name>{suffix}` file in {dir}, found {}", .found.len())]
    TopNameDiscovery {
        /// The simulation directory.
        dir: PathBuf,
        /// The file suffix searched for.
        suffix: String,
        /// Matching file names, sorted.
        found: Vec<String>,
    },

    /// Reading the directory or writing a file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A document could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A generator bug.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl EmitError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> EmitError {
        let path = path.into();
        move |source| EmitError::Io { path, source }
    }

    /// Returns the stable diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            EmitError::TopNameDiscovery { .. } => DiagnosticCode::error(301),
            EmitError::Io { .. } => DiagnosticCode::error(401),
            EmitError::Template(e) => e.code(),
            EmitError::Internal(_) => DiagnosticCode::error(999),
        }
    }

    /// Converts this error into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            EmitError::Template(e) => e.to_diagnostic(),
            EmitError::TopNameDiscovery { suffix, found, .. } => {
                let diag = Diagnostic::error(self.code(), self.to_string(), Span::DUMMY);
                if found.is_empty() {
                    diag.with_help(format!(
                        "run the vendor simulation export first so that it writes \
                         `<top>{suffix}` into this directory"
                    ))
                } else {
                    diag.with_note(format!("candidates: {}", found.join(", ")))
                }
            }
            _ => Diagnostic::error(self.code(), self.to_string(), Span::DUMMY),
        }
    }
}

//! Errors raised while reading a stub.

use cosim_common::AxiPort;
use cosim_diagnostics::{Diagnostic, DiagnosticCode, Label};
use cosim_source::Span;
use std::path::PathBuf;

/// A fatal problem with the stub. Generation stops and nothing is written.
#[derive(Debug, thiserror::Error)]
pub enum StubError {
    /// The text does not mention a PS7 instance at all.
    #[error("could not find a processing system in {path}")]
    MissingMarker {
        /// The offending stub.
        path: PathBuf,
    },

    /// The PS7 marker is present but no matching entity declaration is.
    #[error("no processing system entity declaration in {path}")]
    MissingEntity {
        /// The offending stub.
        path: PathBuf,
    },

    /// The entity's port list never reaches its closing `);` line.
    #[error("port list of entity `{entity}` is never closed")]
    UnterminatedPortList {
        /// The entity name.
        entity: String,
        /// The entity declaration line.
        span: Span,
    },

    /// A detected interface lacks one of its five characteristic vectors.
    #[error("interface {port} has no vector declaration for {signal}")]
    MissingWidth {
        /// The interface being resolved.
        port: AxiPort,
        /// The full signal name that was looked up, e.g. `S_AXI_HP0_RID`.
        signal: String,
        /// The interface's first mention in the stub.
        span: Span,
    },

    /// A vector's high index does not fit a width.
    #[error("high index `{value}` of {signal} is not a usable width")]
    InvalidWidth {
        /// The full signal name.
        signal: String,
        /// The digits found in the declaration.
        value: String,
        /// The declaration.
        span: Span,
    },
}

impl StubError {
    /// Returns the stable diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            StubError::MissingMarker { .. } => DiagnosticCode::error(101),
            StubError::MissingEntity { .. } => DiagnosticCode::error(102),
            StubError::UnterminatedPortList { .. } => DiagnosticCode::error(103),
            StubError::MissingWidth { .. } => DiagnosticCode::error(104),
            StubError::InvalidWidth { .. } => DiagnosticCode::error(105),
        }
    }

    /// Converts this error into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let message = self.to_string();
        match self {
            StubError::MissingMarker { .. } => {
                Diagnostic::error(self.code(), message, Span::DUMMY).with_help(
                    "pass the stub generated for the processing_system7 IP \
                     (its entity name ends in `processing_system7_0_0`)",
                )
            }
            StubError::MissingEntity { .. } => {
                Diagnostic::error(self.code(), message, Span::DUMMY)
                    .with_note("expected a line of the form `entity <name>7_0_0 is`")
            }
            StubError::UnterminatedPortList { span, .. } => {
                Diagnostic::error(self.code(), message, *span)
                    .with_label(Label::primary(*span, "port list starts after this line"))
                    .with_note("the port list must end with an indented `);` line")
            }
            StubError::MissingWidth { port, span, .. } => {
                Diagnostic::error(self.code(), message, *span)
                    .with_label(Label::primary(*span, format!("{port} detected here")))
                    .with_note(
                        "widths are read from the ARADDR, RDATA, RID, ARLEN and ARLOCK vectors",
                    )
            }
            StubError::InvalidWidth { span, .. } => {
                Diagnostic::error(self.code(), message, *span)
                    .with_label(Label::primary(*span, "declared here"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_marker_names_file() {
        let err = StubError::MissingMarker {
            path: PathBuf::from("ip/top_stub.vhdl"),
        };
        assert_eq!(
            err.to_string(),
            "could not find a processing system in ip/top_stub.vhdl"
        );
        assert_eq!(err.code().to_string(), "E101");
    }

    #[test]
    fn missing_width_diagnostic_points_at_interface() {
        let err = StubError::MissingWidth {
            port: AxiPort::SHp0,
            signal: "S_AXI_HP0_RID".to_string(),
            span: Span::DUMMY,
        };
        let diag = err.to_diagnostic();
        assert_eq!(diag.code.to_string(), "E104");
        assert_eq!(
            diag.message,
            "interface S_AXI_HP0 has no vector declaration for S_AXI_HP0_RID"
        );
        assert_eq!(diag.labels.len(), 1);
        assert!(diag.labels[0].message.contains("S_AXI_HP0"));
    }

    #[test]
    fn codes_are_distinct() {
        let errors = [
            StubError::MissingMarker {
                path: PathBuf::new(),
            },
            StubError::MissingEntity {
                path: PathBuf::new(),
            },
            StubError::UnterminatedPortList {
                entity: "x".to_string(),
                span: Span::DUMMY,
            },
            StubError::InvalidWidth {
                signal: "x".to_string(),
                value: "99999999999".to_string(),
                span: Span::DUMMY,
            },
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }
}

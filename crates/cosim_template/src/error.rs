//! Template rendering errors.

use cosim_diagnostics::{Diagnostic, DiagnosticCode};
use cosim_source::Span;

/// Errors raised while rendering a template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// A declared placeholder has no value in the render context.
    #[error("placeholder `{{{{{placeholder}}}}}` of template `{template}` has no value")]
    Unresolved {
        /// The template being rendered.
        template: String,
        /// The placeholder name without braces.
        placeholder: String,
    },
}

impl TemplateError {
    /// Returns the stable diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            TemplateError::Unresolved { .. } => DiagnosticCode::error(201),
        }
    }

    /// Converts this error into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code(), self.to_string(), Span::DUMMY)
            .with_note("no output file was written")
    }
}

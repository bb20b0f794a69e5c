//! Structured diagnostics for the generator.
//!
//! Every user-facing failure and warning is reported as a [`Diagnostic`] with
//! a stable [`DiagnosticCode`], an optional location in the stub and free-form
//! notes. [`DiagnosticSink`] collects non-fatal warnings during a run and
//! [`TerminalRenderer`] prints them rustc-style.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod label;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use label::{Label, LabelStyle};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;

//! Text generation for the co-simulation wrapper and its build scripts.
//!
//! A [`Template`] is fixed text with `{{KEY}}` placeholders; rendering it
//! against a [`RenderContext`] fails if any placeholder is left without a
//! value. [`TemplateEngine`] owns the fixed vocabulary and composes the
//! three output documents from a parsed stub.

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod template;
pub mod vocabulary;

pub use engine::{wrapper_file_name, RenderedWrapper, TemplateEngine, DISABLED_CLOCK_PERIOD};
pub use error::TemplateError;
pub use template::{RenderContext, Template};

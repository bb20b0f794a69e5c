//! `{{KEY}}` templates and their render context.

use crate::error::TemplateError;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("placeholder pattern is valid")
});

/// A named piece of text with `{{KEY}}` placeholders.
///
/// The placeholders are collected once, when the template is built, so a
/// render can be checked for completeness before any text is produced.
#[derive(Clone, Debug)]
pub struct Template {
    name: String,
    text: String,
    placeholders: Vec<String>,
}

impl Template {
    /// Builds a template and records its placeholders in order of first
    /// appearance.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let mut placeholders: Vec<String> = Vec::new();
        for caps in PLACEHOLDER_RE.captures_iter(&text) {
            let key = &caps[1];
            if !placeholders.iter().any(|p| p == key) {
                placeholders.push(key.to_string());
            }
        }
        Self {
            name: name.into(),
            text,
            placeholders,
        }
    }

    /// The template name used in error messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared placeholders, without braces.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Substitutes every placeholder with its value from `ctx`.
    ///
    /// Values are inserted literally: braces inside a value are not treated
    /// as placeholders. Keys in `ctx` that the template does not use are
    /// ignored.
    pub fn render(&self, ctx: &RenderContext) -> Result<String, TemplateError> {
        if let Some(missing) = self.placeholders.iter().find(|p| ctx.get(p).is_none()) {
            return Err(TemplateError::Unresolved {
                template: self.name.clone(),
                placeholder: missing.clone(),
            });
        }
        let rendered = PLACEHOLDER_RE.replace_all(&self.text, |caps: &Captures<'_>| {
            ctx.get(&caps[1]).unwrap_or_default().to_string()
        });
        Ok(rendered.into_owned())
    }
}

/// Placeholder values for one render, keyed by placeholder name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderContext {
    values: BTreeMap<String, String>,
}

impl RenderContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns the value bound to `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no key is bound.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

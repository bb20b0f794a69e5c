//! Labels annotating spans inside a diagnostic.

use cosim_source::Span;
use serde::{Deserialize, Serialize};

/// Whether a label marks the main location or extra context.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LabelStyle {
    /// Underlined with `^` under the quoted line.
    Primary,
    /// Listed after the quoted line with its own location.
    Secondary,
}

/// A message attached to a span of the stub.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Label {
    /// The annotated span.
    pub span: Span,
    /// Text printed next to the underline.
    pub message: String,
    /// Primary or secondary.
    pub style: LabelStyle,
}

impl Label {
    /// Creates a primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            style: LabelStyle::Primary,
        }
    }

    /// Creates a secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            style: LabelStyle::Secondary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_style() {
        assert_eq!(Label::primary(Span::DUMMY, "a").style, LabelStyle::Primary);
        let l = Label::secondary(Span::DUMMY, "first mention");
        assert_eq!(l.style, LabelStyle::Secondary);
        assert_eq!(l.message, "first mention");
    }
}

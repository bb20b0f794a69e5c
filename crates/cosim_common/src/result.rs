//! Internal error type for generator bugs.

/// Result type for operations that can only fail because of a bug.
pub type CosimResult<T> = Result<T, InternalError>;

/// An internal error indicating a bug in the generator, not a problem with the
/// user's stub or simulation directory.
///
/// User-facing failures have their own error enums in the crate that detects
/// them; this type is reserved for violated internal invariants such as two
/// artifacts of one run sharing a file name.
#[derive(Debug, thiserror::Error)]
#[error("internal generator error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let err = InternalError::new("leftover placeholder");
        assert_eq!(
            format!("{err}"),
            "internal generator error: leftover placeholder"
        );
    }

    #[test]
    fn from_string() {
        let err: InternalError = "from string".to_string().into();
        assert_eq!(err.message, "from string");
    }

    #[test]
    fn err_path() {
        let r: CosimResult<u32> = Err(InternalError::new("boom"));
        assert_eq!(r.unwrap_err().message, "boom");
    }
}

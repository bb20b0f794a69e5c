//! Spans resolved to human-readable coordinates.

use std::fmt;
use std::path::PathBuf;

/// A span resolved to 1-indexed line/column coordinates, displayed as
/// `path:line:col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpan {
    /// Path of the source file.
    pub file_path: PathBuf,
    /// Starting line (1-indexed).
    pub start_line: u32,
    /// Starting column (1-indexed).
    pub start_col: u32,
    /// Ending line (1-indexed).
    pub end_line: u32,
    /// Ending column (1-indexed).
    pub end_col: u32,
}

impl fmt::Display for ResolvedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.file_path.display(),
            self.start_line,
            self.start_col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let rs = ResolvedSpan {
            file_path: PathBuf::from("ip/design_1_processing_system7_0_0_stub.vhdl"),
            start_line: 40,
            start_col: 5,
            end_line: 40,
            end_col: 21,
        };
        assert_eq!(
            rs.to_string(),
            "ip/design_1_processing_system7_0_0_stub.vhdl:40:5"
        );
    }
}

//! A loaded source with line-start indexing.

use crate::span::FileId;
use cosim_common::ContentHash;
use std::path::PathBuf;

/// A stub file loaded into the [`SourceDb`](crate::SourceDb).
///
/// Keeps the offset of every line start so spans found by the stub scanner
/// can be reported as `line:column`.
pub struct SourceFile {
    /// The identifier of this file.
    pub id: FileId,
    /// Where the stub was read from, or the name it was registered under.
    pub path: PathBuf,
    /// The stub text as read.
    pub content: String,
    /// Offset of every line start, beginning with 0.
    line_starts: Vec<u32>,
    /// Fingerprint of the content, logged so runs can be correlated.
    pub content_hash: ContentHash,
}

impl SourceFile {
    /// Creates a new source file.
    pub fn new(id: FileId, path: PathBuf, content: String) -> Self {
        let line_starts = compute_line_starts(&content);
        let content_hash = ContentHash::from_bytes(content.as_bytes());
        Self {
            id,
            path,
            content,
            line_starts,
            content_hash,
        }
    }

    /// Converts a byte offset into 1-indexed `(line, column)` coordinates.
    pub fn line_col(&self, byte_offset: u32) -> (u32, u32) {
        let line_idx = self
            .line_starts
            .partition_point(|&start| start <= byte_offset)
            .saturating_sub(1);
        (
            line_idx as u32 + 1,
            byte_offset - self.line_starts[line_idx] + 1,
        )
    }

    /// Returns the text of the given 1-indexed line without its terminator.
    pub fn line_text(&self, line: u32) -> &str {
        let idx = (line.max(1) - 1) as usize;
        let Some(&start) = self.line_starts.get(idx) else {
            return "";
        };
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.content.len(), |&next| next as usize);
        self.content[start as usize..end].trim_end_matches(['\n', '\r'])
    }

    /// Returns the text between two byte offsets.
    pub fn snippet(&self, start: u32, end: u32) -> &str {
        &self.content[start as usize..end as usize]
    }
}

fn compute_line_starts(content: &str) -> Vec<u32> {
    std::iter::once(0)
        .chain(content.match_indices('\n').map(|(i, _)| i as u32 + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_file(content: &str) -> SourceFile {
        SourceFile::new(
            FileId::from_raw(0),
            PathBuf::from("ps7_stub.vhd"),
            content.to_string(),
        )
    }

    #[test]
    fn line_starts_computation() {
        let f = make_file("abc\ndef\nghi");
        assert_eq!(f.line_starts, vec![0, 4, 8]);
    }

    #[test]
    fn line_col_resolution() {
        let f = make_file("abc\ndef\nghi");
        assert_eq!(f.line_col(0), (1, 1));
        assert_eq!(f.line_col(5), (2, 2));
        assert_eq!(f.line_col(8), (3, 1));
    }

    #[test]
    fn line_text_strips_terminators() {
        let f = make_file("entity x is\r\n  Port (\n  );");
        assert_eq!(f.line_text(1), "entity x is");
        assert_eq!(f.line_text(2), "  Port (");
        assert_eq!(f.line_text(3), "  );");
        assert_eq!(f.line_text(9), "");
    }

    #[test]
    fn snippet_extraction() {
        let f = make_file("FCLK_CLK0 : out STD_LOGIC;");
        assert_eq!(f.snippet(0, 9), "FCLK_CLK0");
    }

    #[test]
    fn empty_file() {
        let f = make_file("");
        assert_eq!(f.line_col(0), (1, 1));
        assert_eq!(f.line_text(1), "");
    }

    #[test]
    fn content_hash_computed() {
        let f = make_file("IRQ_F2P");
        assert_eq!(f.content_hash, ContentHash::from_bytes(b"IRQ_F2P"));
    }
}

//! Owner of all source text loaded during a run.

use crate::resolved_span::ResolvedSpan;
use crate::source_file::SourceFile;
use crate::span::{FileId, Span, MAX_SOURCE_LEN};
use std::io;
use std::path::{Path, PathBuf};

/// The source database: owns loaded stub text and resolves [`Span`]s to
/// line/column coordinates.
pub struct SourceDb {
    files: Vec<SourceFile>,
}

impl SourceDb {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Reads a file from disk and returns its [`FileId`].
    ///
    /// Files longer than [`MAX_SOURCE_LEN`] are rejected with
    /// [`io::ErrorKind::InvalidData`].
    pub fn load_file(&mut self, path: &Path) -> Result<FileId, io::Error> {
        let len = std::fs::metadata(path)?.len();
        if len > MAX_SOURCE_LEN as u64 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{len} bytes exceeds the {MAX_SOURCE_LEN}-byte source limit"),
            ));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(self.add_source(path, content))
    }

    /// Adds in-memory text under the given display name. The text must not
    /// exceed [`MAX_SOURCE_LEN`] bytes.
    pub fn add_source(&mut self, name: impl Into<PathBuf>, content: String) -> FileId {
        let id = FileId::from_raw(self.files.len() as u32);
        self.files.push(SourceFile::new(id, name.into(), content));
        id
    }

    /// Returns the [`SourceFile`] for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this database.
    pub fn get_file(&self, id: FileId) -> &SourceFile {
        &self.files[id.as_raw() as usize]
    }

    /// Resolves a [`Span`] to line/column coordinates.
    pub fn resolve_span(&self, span: Span) -> ResolvedSpan {
        let file = self.get_file(span.file);
        let (start_line, start_col) = file.line_col(span.start);
        let (end_line, end_col) = file.line_col(span.end.saturating_sub(1).max(span.start));
        ResolvedSpan {
            file_path: file.path.clone(),
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Returns the text covered by a [`Span`].
    pub fn snippet(&self, span: Span) -> &str {
        self.get_file(span.file).snippet(span.start, span.end)
    }
}

impl Default for SourceDb {
    fn default() -> Self {
        Self::new()
    }
}

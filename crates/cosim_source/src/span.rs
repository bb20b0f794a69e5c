//! File identifiers and byte ranges within loaded sources.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Largest source text, in bytes, whose offsets fit in a [`Span`].
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Opaque identifier for a file loaded into the [`SourceDb`](crate::SourceDb).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct FileId(u32);

impl FileId {
    /// Identifier used by spans that have no backing file.
    pub const DUMMY: FileId = FileId(u32::MAX);

    /// Creates a `FileId` from a raw index.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw index.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

/// A half-open byte range `[start, end)` within one source file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Span {
    /// The file this span belongs to.
    pub file: FileId,
    /// Byte offset of the first byte (inclusive).
    pub start: u32,
    /// Byte offset one past the last byte (exclusive).
    pub end: u32,
}

impl Span {
    /// A span with no source location.
    pub const DUMMY: Span = Span {
        file: FileId::DUMMY,
        start: 0,
        end: 0,
    };

    /// Creates a span from explicit offsets.
    pub fn new(file: FileId, start: u32, end: u32) -> Self {
        Self { file, start, end }
    }

    /// Creates a span from a byte range as returned by `str::find` or a regex
    /// match.
    ///
    /// Offsets past [`MAX_SOURCE_LEN`] saturate to it; [`SourceDb`] refuses
    /// to load text that long.
    ///
    /// [`SourceDb`]: crate::SourceDb
    pub fn from_range(file: FileId, range: Range<usize>) -> Self {
        let offset = |at: usize| u32::try_from(at).unwrap_or(u32::MAX);
        Self::new(file, offset(range.start), offset(range.end))
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if this span has no backing file.
    pub fn is_dummy(&self) -> bool {
        self.file == FileId::DUMMY
    }
}

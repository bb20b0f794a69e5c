//! Source text management for stub files.
//!
//! [`SourceDb`] owns the text of every loaded stub, [`Span`] ties byte ranges
//! to a [`FileId`], and [`ResolvedSpan`] turns them into `file:line:col`
//! coordinates for diagnostics.

#![warn(missing_docs)]

pub mod resolved_span;
pub mod source_db;
pub mod source_file;
pub mod span;

pub use resolved_span::ResolvedSpan;
pub use source_db::SourceDb;
pub use source_file::SourceFile;
pub use span::{FileId, Span, MAX_SOURCE_LEN};

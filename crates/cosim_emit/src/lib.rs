//! Writing the generated documents into the simulation directory.
//!
//! Documents are first rendered into an [`ArtifactSet`]; nothing touches the
//! filesystem until [`ArtifactSet::commit`] has staged every document next
//! to its destination.

#![warn(missing_docs)]

pub mod artifact;
pub mod discover;
pub mod emit;
pub mod error;

pub use artifact::{Artifact, ArtifactKind, ArtifactSet};
pub use discover::discover_top_name;
pub use emit::{build_artifacts, emit_compile_script, emit_top_script, emit_wrapper};
pub use error::EmitError;

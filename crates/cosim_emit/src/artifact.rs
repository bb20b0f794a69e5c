//! Rendered documents and their staged commit.

use crate::error::EmitError;
use cosim_common::{ContentHash, InternalError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Which of the generated documents an artifact is.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArtifactKind {
    /// The parameterized VHDL wrapper.
    Wrapper,
    /// The co-simulation compile script.
    CompileScript,
    /// The top-level simulation script.
    TopScript,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ArtifactKind::Wrapper => "wrapper",
            ArtifactKind::CompileScript => "compile script",
            ArtifactKind::TopScript => "top script",
        })
    }
}

/// One rendered document and the file name it is written under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// The kind of document.
    pub kind: ArtifactKind,
    /// File name relative to the simulation directory.
    pub file_name: String,
    /// Full document text.
    pub contents: String,
    /// Fingerprint of `contents`.
    pub hash: ContentHash,
}

impl Artifact {
    /// Creates an artifact and fingerprints its contents.
    pub fn new(kind: ArtifactKind, file_name: impl Into<String>, contents: String) -> Self {
        let hash = ContentHash::from_bytes(contents.as_bytes());
        Self {
            kind,
            file_name: file_name.into(),
            contents,
            hash,
        }
    }
}

/// The documents of one run, held in memory until committed.
#[derive(Clone, Debug)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    /// Groups artifacts for a commit. File names must be distinct.
    pub fn new(artifacts: Vec<Artifact>) -> Result<Self, EmitError> {
        for (i, a) in artifacts.iter().enumerate() {
            if artifacts[..i].iter().any(|b| b.file_name == a.file_name) {
                return Err(InternalError::new(format!(
                    "two artifacts would be written to `{}`",
                    a.file_name
                ))
                .into());
            }
        }
        Ok(Self { artifacts })
    }

    /// The artifacts in output order.
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    /// Returns the artifact of the given kind.
    pub fn get(&self, kind: ArtifactKind) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    /// Number of artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// The destination path of every artifact under `dir`.
    pub fn plan(&self, dir: &Path) -> Vec<PathBuf> {
        self.artifacts
            .iter()
            .map(|a| dir.join(&a.file_name))
            .collect()
    }

    /// Writes every artifact into `dir`.
    ///
    /// Each document is first written in full to a temporary file inside
    /// `dir`. Only once all of them are staged are they renamed onto their
    /// destinations, so a failure while staging leaves existing files
    /// untouched. If a rename fails, the destinations already replaced get
    /// their previous contents back, or are removed if they did not exist.
    /// Returns the written paths in output order.
    pub fn commit(&self, dir: &Path) -> Result<Vec<PathBuf>, EmitError> {
        let mut staged = Vec::with_capacity(self.artifacts.len());
        for artifact in &self.artifacts {
            let target = dir.join(&artifact.file_name);
            let mut tmp = NamedTempFile::new_in(dir).map_err(EmitError::io(dir))?;
            let staged_path = tmp.path().to_path_buf();
            tmp.write_all(artifact.contents.as_bytes())
                .and_then(|()| tmp.flush())
                .map_err(EmitError::io(&staged_path))?;
            log::debug!("staged {} at {}", artifact.file_name, staged_path.display());
            staged.push((artifact, tmp, target));
        }

        let previous = staged
            .iter()
            .map(|(_, _, target)| {
                if target.is_file() {
                    std::fs::read(target).map(Some).map_err(EmitError::io(target))
                } else {
                    Ok(None)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut written: Vec<PathBuf> = Vec::with_capacity(staged.len());
        for (artifact, tmp, target) in staged {
            if let Err(e) = tmp.persist(&target) {
                roll_back(&written, &previous);
                return Err(EmitError::io(&target)(e.error));
            }
            log::info!(
                "wrote {} ({}, {} bytes, {})",
                target.display(),
                artifact.kind,
                artifact.contents.len(),
                artifact.hash.short()
            );
            written.push(target);
        }
        Ok(written)
    }
}

/// Restores the destinations replaced before a failed rename.
/// `previous[i]` is what `replaced[i]` held before the commit.
fn roll_back(replaced: &[PathBuf], previous: &[Option<Vec<u8>>]) {
    for (target, before) in replaced.iter().zip(previous) {
        let restored = match before {
            Some(bytes) => std::fs::write(target, bytes),
            None => std::fs::remove_file(target),
        };
        match restored {
            Ok(()) => log::warn!("commit failed, restored {}", target.display()),
            Err(e) => log::error!(
                "commit failed and {} could not be restored: {e}",
                target.display()
            ),
        }
    }
}

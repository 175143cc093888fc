use std::collections::HashSet;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// Marker on the first line of every emitted file. Cleanup only ever
/// removes files that carry it.
pub const GENERATED_MARKER: &str = "@generated by stencil";

/// First lines of an emitted file, with an optional provenance line.
pub fn generated_header(source_name: Option<&str>) -> String {
    let mut header = format!("// {GENERATED_MARKER}. Do not edit by hand.\n");
    if let Some(source) = source_name {
        header.push_str(&format!("// source: {source}\n"));
    }
    header
}

/// `true` if `content` starts with the generated header.
pub fn is_generated(content: &str) -> bool {
    content
        .lines()
        .next()
        .is_some_and(|line| line.trim_start().starts_with("//") && line.contains(GENERATED_MARKER))
}

/// Which configured directory an artifact is written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactRoot {
    /// Type declarations and the data-access client.
    Output,
    /// Route scaffolds.
    Routes,
}

/// What produced an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Types,
    Client,
    Route,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Types => write!(f, "types"),
            Self::Client => write!(f, "client"),
            Self::Route => write!(f, "route"),
        }
    }
}

/// A relative path below an [`ArtifactRoot`], made only of normal
/// components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactPath(PathBuf);

impl ArtifactPath {
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let display = || path.display().to_string();

        if path.as_os_str().is_empty() {
            return Err(DomainError::PathEscapesRoot { path: display() });
        }
        for component in path.components() {
            match component {
                Component::Normal(_) => {}
                Component::RootDir | Component::Prefix(_) => {
                    return Err(DomainError::AbsolutePathNotAllowed { path: display() });
                }
                Component::CurDir | Component::ParentDir => {
                    return Err(DomainError::PathEscapesRoot { path: display() });
                }
            }
        }
        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ArtifactPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// One emitted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub root: ArtifactRoot,
    pub path: ArtifactPath,
    pub kind: ArtifactKind,
    pub content: String,
    /// Source document the artifact was emitted from, when there is exactly one.
    pub source_name: Option<String>,
}

/// Everything one generation run wants to write.
#[derive(Debug, Clone, Default)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    pub fn extend(&mut self, artifacts: impl IntoIterator<Item = Artifact>) {
        self.artifacts.extend(artifacts);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Artifact> {
        self.artifacts.iter_mut()
    }

    pub fn of_kind(&self, kind: ArtifactKind) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter().filter(move |a| a.kind == kind)
    }

    pub fn contains(&self, root: ArtifactRoot, path: &Path) -> bool {
        self.artifacts
            .iter()
            .any(|a| a.root == root && a.path.as_path() == path)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Reject duplicate `(root, path)` pairs and empty files.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for artifact in &self.artifacts {
            if !seen.insert((artifact.root, artifact.path.clone())) {
                return Err(DomainError::DuplicatePath {
                    path: artifact.path.to_string(),
                });
            }
            if artifact.content.trim().is_empty() {
                return Err(DomainError::EmptyArtifact {
                    path: artifact.path.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl IntoIterator for ArtifactSet {
    type Item = Artifact;
    type IntoIter = std::vec::IntoIter<Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.into_iter()
    }
}

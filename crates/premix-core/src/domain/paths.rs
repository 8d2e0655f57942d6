//! Filesystem value objects shared by the domain and application layers.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::DEFAULT_ASSETS_DIR;
use crate::domain::error::DomainError;

// ── TargetDir ────────────────────────────────────────────────────────────────

/// The user-chosen assets directory name.
///
/// Invariant: a single, non-empty path segment. Enforced at construction,
/// so everything downstream can join it onto the project root without
/// re-checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetDir(String);

impl TargetDir {
    /// Validate a directory name.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::InvalidTargetDir {
                name,
                reason: "name is empty".into(),
            });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(DomainError::InvalidTargetDir {
                name,
                reason: "path separators are not allowed".into(),
            });
        }
        if name == "." || name == ".." {
            return Err(DomainError::InvalidTargetDir {
                name,
                reason: "'.' and '..' are reserved".into(),
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TargetDir {
    /// The conventional `assets` directory.
    fn default() -> Self {
        Self(DEFAULT_ASSETS_DIR.to_owned())
    }
}

impl AsRef<Path> for TargetDir {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for TargetDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── RelativePath ─────────────────────────────────────────────────────────────

/// A filesystem path guaranteed to be relative, with no parent traversal.
///
/// Invariant: never absolute and never contains `..`. Enforced at
/// construction so template sources cannot smuggle writes outside the
/// destination tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: path.display().to_string(),
            });
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Err(DomainError::PathTraversalNotAllowed {
                path: path.display().to_string(),
            });
        }
        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

// ── AssetFile ────────────────────────────────────────────────────────────────

/// One starter file from a preset's asset tree.
///
/// `path` is relative to the asset tree root; the copy step re-roots it
/// under the destination directory.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetFile {
    pub path: RelativePath,
    pub content: String,
}

impl AssetFile {
    pub fn new(path: RelativePath, content: impl Into<String>) -> Self {
        Self {
            path,
            content: content.into(),
        }
    }
}

// ── tests ────────────────────────────────────────────────────────────────────

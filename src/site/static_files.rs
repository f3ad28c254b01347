//! Static asset lookup.
//!
//! Relative paths are joined onto the asset root as-is. Nothing is
//! normalised: `..` segments are followed, and a path that is absolute after
//! stripping the leading slash replaces the root entirely.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::StaticConfig;

/// Any failure to read a static file. The cause is not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("static file not found")
    }
}

impl std::error::Error for NotFound {}

#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(cfg: &StaticConfig) -> Self {
        Self::new(cfg.root.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem location for a relative request path.
    pub fn resolve(&self, relative_path: &str) -> PathBuf {
        self.root.join(relative_path)
    }

    /// Reads the whole file at `relative_path` into memory.
    pub async fn load(&self, relative_path: &str) -> Result<Vec<u8>, NotFound> {
        let file_path = self.resolve(relative_path);

        match tokio::fs::read(&file_path).await {
            Ok(bytes) => {
                tracing::debug!(
                    file = %file_path.display(),
                    bytes = bytes.len(),
                    "Serving static file"
                );
                Ok(bytes)
            }
            Err(e) => {
                tracing::debug!(
                    file = %file_path.display(),
                    error = %e,
                    "Static file unavailable"
                );
                Err(NotFound)
            }
        }
    }
}

/// Strips exactly one leading `/`.
pub fn relative_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

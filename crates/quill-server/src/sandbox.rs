//! Safe joining of untrusted relative paths onto a trusted base.
//!
//! The containment check runs on the fully canonicalized join — `.`, `..`
//! and symlinks resolved to a real absolute path — against the
//! independently canonicalized base. Canonicalizing both sides means a
//! symlink inside the base that points outside it is caught, and so is a
//! base that is itself reached through a symlink.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Containment failure.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// The canonical path is neither the base nor a descendant of it.
    #[error("path escapes base directory: {0}")]
    Escape(PathBuf),

    /// The joined path (or the base) could not be canonicalized.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Resolve `relative` against `base`, refusing any result outside `base`.
///
/// Returns the canonical absolute path on success. Stateless: reads the
/// filesystem to canonicalize, never mutates it. An absolute `relative`
/// replaces the base on join and then fails containment, which is the
/// intended answer for such input.
pub async fn resolve_under(base: &Path, relative: &str) -> Result<PathBuf, SandboxError> {
    let joined = base.join(relative);
    let canonical = tokio::fs::canonicalize(&joined).await?;
    let canonical_base = tokio::fs::canonicalize(base).await?;

    if !canonical.starts_with(&canonical_base) {
        return Err(SandboxError::Escape(canonical));
    }

    Ok(canonical)
}

//! Scoped serving of notebook `public/` files.
//!
//! A notebook author opts into exposing files by placing them in a
//! `public/` directory next to the notebook source. Requests are scoped by
//! notebook id — there is no server-wide public directory — and every path
//! goes through the sandbox primitive before any read.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use quill_types::NotebookId;

use crate::constants::PUBLIC_DIR_NAME;
use crate::error::ServeError;
use crate::media;
use crate::registry::NotebookRegistry;
use crate::sandbox::{self, SandboxError};

/// A resolved public file ready to stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicFile {
    pub bytes: Vec<u8>,
    pub media_type: Option<&'static str>,
}

/// Serves files from the `public/` directory next to a notebook's source.
#[derive(Clone)]
pub struct PublicFileServer {
    registry: Arc<dyn NotebookRegistry>,
}

impl PublicFileServer {
    /// Server over the given session registry.
    pub fn new(registry: Arc<dyn NotebookRegistry>) -> Self {
        Self { registry }
    }

    /// Serve `relative` scoped to the given notebook.
    ///
    /// The notebook id arrives as an explicit parameter — the HTTP layer
    /// decodes the header. Unscoped requests are refused outright before
    /// any filesystem access; there is no default directory.
    pub async fn serve(
        &self,
        notebook: Option<&NotebookId>,
        relative: &str,
    ) -> Result<PublicFile, ServeError> {
        let Some(id) = notebook.filter(|id| !id.is_empty()) else {
            tracing::debug!("public file request without notebook id");
            return Err(ServeError::NotFound);
        };

        let public_dir = self.notebook_dir(id)?.join(PUBLIC_DIR_NAME);

        let real = match sandbox::resolve_under(&public_dir, relative).await {
            Ok(path) => path,
            Err(SandboxError::Escape(path)) => {
                tracing::debug!(
                    notebook = %id,
                    path = %path.display(),
                    "public file request escapes sandbox"
                );
                return Err(ServeError::Denied);
            }
            Err(SandboxError::Io(_)) => return Err(ServeError::NotFound),
        };

        // Symlinks are refused at the leaf no matter where they point.
        // Stat the joined path, not the canonical one, to see the link
        // itself rather than its target.
        let joined = public_dir.join(relative);
        let leaf = tokio::fs::symlink_metadata(&joined)
            .await
            .map_err(|_| ServeError::NotFound)?;
        if leaf.file_type().is_symlink() {
            tracing::debug!(path = %joined.display(), "refusing symlinked public file");
            return Err(ServeError::NotFound);
        }

        let meta = tokio::fs::metadata(&real)
            .await
            .map_err(|_| ServeError::NotFound)?;
        if !meta.is_file() {
            return Err(ServeError::NotFound);
        }

        let bytes = tokio::fs::read(&real)
            .await
            .map_err(|_| ServeError::NotFound)?;
        tracing::debug!(notebook = %id, path = %real.display(), "serving public file");

        let media_type = real
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(media::media_type);
        Ok(PublicFile { bytes, media_type })
    }

    /// The directory containing the notebook's source, or the process
    /// current working directory when the registry knows no source path.
    fn notebook_dir(&self, id: &NotebookId) -> Result<PathBuf, ServeError> {
        match self.registry.notebook_path(id) {
            Some(source) => Ok(source
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))),
            None => env::current_dir().map_err(|_| ServeError::NotFound),
        }
    }
}

//! Virtual-file resolution.
//!
//! Turns a `/@file/` token into bytes from the injected store. No
//! filesystem access anywhere on this path; the store read is the only
//! side effect.

use std::sync::Arc;

use quill_types::VirtualFileToken;
use quill_vfs::VirtualFileStore;

use crate::constants::OCTET_STREAM;
use crate::error::ServeError;
use crate::media;

/// A resolved virtual file ready to stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFile {
    pub bytes: Vec<u8>,
    /// `None` when the extension has no mapping; the HTTP layer then
    /// omits the header instead of guessing.
    pub media_type: Option<&'static str>,
}

/// Resolves `/@file/` tokens against the buffer store.
#[derive(Clone)]
pub struct VirtualFileResolver {
    store: Arc<dyn VirtualFileStore>,
}

impl VirtualFileResolver {
    /// Resolver over the given store.
    pub fn new(store: Arc<dyn VirtualFileStore>) -> Self {
        Self { store }
    }

    /// Resolve a raw token into bytes and a media type.
    ///
    /// The reserved empty token short-circuits to a zero-length success
    /// with a fixed binary type, regardless of store state.
    pub async fn resolve(&self, token: &str) -> Result<VirtualFile, ServeError> {
        match VirtualFileToken::parse(token)? {
            VirtualFileToken::Empty => Ok(VirtualFile {
                bytes: Vec::new(),
                media_type: Some(OCTET_STREAM),
            }),
            VirtualFileToken::Reference {
                byte_length,
                filename,
            } => {
                let bytes = self
                    .store
                    .lookup(&filename, byte_length)
                    .await
                    .ok_or(ServeError::NotFound)?;
                tracing::debug!(filename = %filename, byte_length, "serving virtual file");
                Ok(VirtualFile {
                    media_type: media::media_type(&filename),
                    bytes,
                })
            }
        }
    }
}

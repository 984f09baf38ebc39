//! Shared per-server state.

use std::path::PathBuf;
use std::sync::Arc;

use quill_vfs::VirtualFileStore;

use crate::public_files::PublicFileServer;
use crate::registry::NotebookRegistry;
use crate::templates::PageRenderer;
use crate::virtual_files::VirtualFileResolver;

/// Everything a request handler needs. Cheap to clone; all fields are
/// shared handles, none hold request-scoped state.
#[derive(Clone)]
pub struct AppState {
    pub virtual_files: VirtualFileResolver,
    pub public_files: PublicFileServer,
    pub templates: Arc<dyn PageRenderer>,
    /// Directory of prebuilt frontend assets (index.html, assets/, icons).
    pub static_root: PathBuf,
}

impl AppState {
    /// Wire the request components to their injected collaborators.
    pub fn new(
        store: Arc<dyn VirtualFileStore>,
        registry: Arc<dyn NotebookRegistry>,
        templates: Arc<dyn PageRenderer>,
        static_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            virtual_files: VirtualFileResolver::new(store),
            public_files: PublicFileServer::new(registry),
            templates,
            static_root: static_root.into(),
        }
    }
}

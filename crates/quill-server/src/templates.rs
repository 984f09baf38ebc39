//! Page-shell rendering seam.
//!
//! Markup generation is not this server's concern. The renderer receives
//! the request's file key and returns final HTML; the core passes it
//! through untouched and never inspects it.

use std::path::{Path, PathBuf};

/// Renders the page shell for the index route.
pub trait PageRenderer: Send + Sync {
    /// Markup for the landing page (no notebook selected).
    fn home_page(&self) -> String;

    /// Markup for one notebook, identified by its file key.
    fn notebook_page(&self, file_key: &str) -> String;
}

/// Renderer that returns the prebuilt `index.html` shell from the static
/// root unmodified, for frontends that do their own client-side setup.
pub struct DirShell {
    index: PathBuf,
}

impl DirShell {
    /// Shell renderer rooted at a static asset directory.
    pub fn new(static_root: &Path) -> Self {
        Self {
            index: static_root.join("index.html"),
        }
    }

    fn shell(&self) -> String {
        std::fs::read_to_string(&self.index).unwrap_or_else(|e| {
            tracing::error!(path = %self.index.display(), "failed to read index shell: {e}");
            "<!doctype html><title>quill</title><p>static assets missing</p>".to_string()
        })
    }
}

impl PageRenderer for DirShell {
    fn home_page(&self) -> String {
        self.shell()
    }

    fn notebook_page(&self, _file_key: &str) -> String {
        self.shell()
    }
}

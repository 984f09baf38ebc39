//! Notebook session registry seam.

use std::path::PathBuf;

use dashmap::DashMap;

use quill_types::NotebookId;

/// Maps a notebook id to the notebook's source file path.
///
/// Session lifecycle is owned elsewhere; this core only ever asks one
/// question. Injecting the trait keeps tests on a fake.
pub trait NotebookRegistry: Send + Sync {
    /// The source file path for a running notebook, if one is known.
    fn notebook_path(&self, id: &NotebookId) -> Option<PathBuf>;
}

/// Registry over a concurrent map, used by the shipped binary and tests.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    notebooks: DashMap<NotebookId, PathBuf>,
}

impl InMemoryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            notebooks: DashMap::new(),
        }
    }

    /// Register (or re-register) a notebook's source file.
    pub fn register(&self, id: NotebookId, source: impl Into<PathBuf>) {
        self.notebooks.insert(id, source.into());
    }

    /// Forget a notebook. Returns whether it was present.
    pub fn deregister(&self, id: &NotebookId) -> bool {
        self.notebooks.remove(id).is_some()
    }
}

impl NotebookRegistry for InMemoryRegistry {
    fn notebook_path(&self, id: &NotebookId) -> Option<PathBuf> {
        self.notebooks.get(id).map(|entry| entry.value().clone())
    }
}

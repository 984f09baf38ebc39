//! Store trait and the in-memory implementation.

use async_trait::async_trait;
use dashmap::DashMap;

use quill_types::VirtualFileToken;

/// Lookup seam for virtual-file buffers.
///
/// Implementations must be safely callable from many concurrent requests;
/// the call may block on I/O for out-of-process stores.
#[async_trait]
pub trait VirtualFileStore: Send + Sync {
    /// Fetch the buffer stored under `filename`, but only if it holds
    /// exactly `byte_length` bytes. Absence and length mismatch are the
    /// same answer: the reference is no longer valid.
    async fn lookup(&self, filename: &str, byte_length: u64) -> Option<Vec<u8>>;
}

/// In-memory buffer store.
///
/// Thread-safe via `DashMap`; all data is lost when dropped. The notebook
/// runtime publishes a buffer when a cell produces an artifact and removes
/// it when the artifact is regenerated or the cell is torn down.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    buffers: DashMap<String, Vec<u8>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            buffers: DashMap::new(),
        }
    }

    /// Publish a buffer under `filename`, returning the token that
    /// addresses it. Replaces any previous buffer with the same name.
    pub fn publish(&self, filename: impl Into<String>, bytes: Vec<u8>) -> VirtualFileToken {
        let filename = filename.into();
        let byte_length = bytes.len() as u64;
        self.buffers.insert(filename.clone(), bytes);
        VirtualFileToken::Reference {
            byte_length,
            filename,
        }
    }

    /// Drop the buffer stored under `filename`, if any.
    pub fn remove(&self, filename: &str) -> bool {
        self.buffers.remove(filename).is_some()
    }

    /// Number of buffers currently held.
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// True when no buffers are held.
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

#[async_trait]
impl VirtualFileStore for InMemoryStore {
    async fn lookup(&self, filename: &str, byte_length: u64) -> Option<Vec<u8>> {
        let entry = self.buffers.get(filename)?;
        if entry.len() as u64 != byte_length {
            tracing::debug!(
                filename,
                expected = byte_length,
                actual = entry.len(),
                "virtual file length mismatch"
            );
            return None;
        }
        Some(entry.value().clone())
    }
}

//! Shared identity and token types for Quill.
//!
//! This crate is the leaf of the workspace: the opaque notebook identifier
//! clients present on the wire, and the virtual-file token that addresses an
//! in-memory buffer by name and length. It has no internal dependencies —
//! other crates build on it.

pub mod ids;
pub mod token;

pub use ids::NotebookId;
pub use token::{TokenError, VirtualFileToken};

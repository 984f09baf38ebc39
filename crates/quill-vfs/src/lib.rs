//! Virtual-file store for Quill.
//!
//! A "virtual file" is an ephemeral byte buffer produced by running a
//! notebook cell — a rendered chart, an exported CSV — addressed by
//! `(filename, byte length)` rather than by filesystem path. This crate
//! owns the store seam:
//!
//! - [`VirtualFileStore`] — the lookup trait the HTTP layer consumes
//! - [`InMemoryStore`] — the shipped implementation backing one server
//!
//! ## Design Decisions
//!
//! - **Length is part of the key**: a lookup only hits when the stored
//!   buffer has exactly the requested byte count, a defense against stale
//!   references to regenerated artifacts.
//! - **No eviction policy here**: the notebook runtime that publishes
//!   buffers decides when they die; the store just forgets what it is told
//!   to forget.

mod store;

pub use store::{InMemoryStore, VirtualFileStore};

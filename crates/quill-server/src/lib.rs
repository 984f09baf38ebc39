//! Quill asset server.
//!
//! HTTP surface for notebook assets: ephemeral virtual files addressed by
//! `{byte_length}-{filename}` tokens, and per-notebook `public/`
//! directories served behind a canonicalize-then-check sandbox. Key
//! components:
//!
//! - [`VirtualFileResolver`] - `/@file/` tokens resolved against the store
//! - [`PublicFileServer`] - `/public/` paths scoped by notebook id
//! - [`sandbox`] - the shared containment primitive both build on
//!
//! ## Design Decisions
//!
//! - **Header is wire encoding only**: the notebook id is decoded from
//!   `X-Notebook-Id` in the route layer and threaded through as an
//!   explicit parameter; components never see HTTP types.
//! - **Collaborators are injected**: the buffer store, session registry,
//!   and page renderer are trait objects, substituted with fakes in tests.
//! - **Refusals are cheap and quiet**: every failure maps to 403/404 with
//!   a debug-level trace and nothing else; all are deterministic functions
//!   of the request, so nothing retries.

pub mod config;
pub mod constants;
pub mod error;
pub mod media;
pub mod public_files;
pub mod registry;
pub mod routes;
pub mod sandbox;
pub mod server;
pub mod state;
pub mod templates;
pub mod virtual_files;

pub use config::ServerConfig;
pub use error::ServeError;
pub use public_files::{PublicFile, PublicFileServer};
pub use registry::{InMemoryRegistry, NotebookRegistry};
pub use server::HttpServer;
pub use state::AppState;
pub use templates::{DirShell, PageRenderer};
pub use virtual_files::{VirtualFile, VirtualFileResolver};

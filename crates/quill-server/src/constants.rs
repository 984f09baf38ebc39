//! Server configuration constants.
//!
//! Centralizes hardcoded values for easier configuration and documentation.

/// Default HTTP port for the quill server.
pub const DEFAULT_PORT: u16 = 2718;

/// Default bind address (localhost only for security).
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

/// Request header carrying the notebook id on `/public/` requests.
pub const NOTEBOOK_ID_HEADER: &str = "x-notebook-id";

/// Cache hint for virtual files. A token is immutable once issued — the
/// filename-length pair is unique per buffer generation.
pub const VIRTUAL_FILE_CACHE_CONTROL: &str = "max-age=86400";

/// Subdirectory of a notebook's directory exposed over `/public/`.
pub const PUBLIC_DIR_NAME: &str = "public";

/// Fixed media type for the reserved empty virtual file.
pub const OCTET_STREAM: &str = "application/octet-stream";

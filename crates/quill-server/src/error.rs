//! Request error taxonomy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use quill_types::TokenError;

/// Terminal request failures.
///
/// Every variant is a deterministic function of the request's own input,
/// so nothing here is retryable and no retry policy exists.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The client sent an unparsable virtual-file reference.
    #[error("malformed virtual file token")]
    MalformedToken(#[from] TokenError),

    /// Buffer absent or length-mismatched, notebook id absent, or file
    /// absent / not a regular file / a symlink.
    #[error("not found")]
    NotFound,

    /// The requested path escapes the public directory.
    #[error("path escapes public directory")]
    Denied,
}

impl ServeError {
    /// HTTP status for this failure.
    ///
    /// Malformed input is indistinguishable from an evicted buffer on the
    /// wire — clients learn nothing about store internals.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedToken(_) | Self::NotFound => StatusCode::NOT_FOUND,
            Self::Denied => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "request rejected");
        let body = match self {
            Self::Denied => "Access denied",
            _ => "File not found",
        };
        (self.status(), body).into_response()
    }
}

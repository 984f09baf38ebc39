//! HTTP routes.
//!
//! Routing here is dispatch glue; every safety decision lives in the
//! components this module calls into. The notebook id is decoded from the
//! `X-Notebook-Id` header at this layer only and passed down as an
//! explicit parameter.

use std::sync::LazyLock;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use regex::RegexSet;
use serde::Deserialize;
use tower_http::services::ServeDir;

use quill_types::NotebookId;

use crate::constants::{NOTEBOOK_ID_HEADER, VIRTUAL_FILE_CACHE_CONTROL};
use crate::error::ServeError;
use crate::media;
use crate::state::AppState;

/// Service worker that tags `/public/` fetches from the browser with the
/// notebook id it received from the page over a message channel.
const SERVICE_WORKER_JS: &str = r#"let currentNotebookId = null;

self.addEventListener('message', (event) => {
    if (event.data.notebookId) {
        currentNotebookId = event.data.notebookId;
    }
});

self.addEventListener('fetch', function (event) {
    if (event.request.url.includes('/public/')) {
        event.respondWith(
            fetch(event.request.url, {
                headers: {
                    'X-Notebook-Id': currentNotebookId
                }
            })
        );
    }
});
"#;

/// Top-level files the frontend may request by name; anything else under
/// the fallback is refused.
static STATIC_ALLOWLIST: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"^favicon\.ico$",
        r"^circle-(check|play|x)\.ico$",
        r"^manifest\.json$",
        r"^android-chrome-(192x192|512x512)\.png$",
        r"^apple-touch-icon\.png$",
        r"^logo\.png$",
    ])
    .expect("static allowlist patterns are valid")
});

/// Build the full router for one server instance.
pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(state.static_root.join("assets"));
    Router::new()
        .route("/", get(index))
        .route("/@file/", get(empty_virtual_file))
        .route("/@file/{*token}", get(virtual_file))
        .route("/public/{*path}", get(public_file))
        .route("/public-files-sw.js", get(service_worker))
        .nest_service("/assets", assets)
        .fallback(static_asset)
        .with_state(state)
}

#[derive(Deserialize)]
struct IndexQuery {
    file: Option<String>,
}

async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    match query.file.as_deref() {
        Some(file_key) if !file_key.is_empty() => {
            tracing::debug!(file_key, "serving notebook page");
            Html(state.templates.notebook_page(file_key))
        }
        _ => {
            tracing::debug!("no file key provided, serving homepage");
            Html(state.templates.home_page())
        }
    }
}

/// `/@file/` with nothing after it is the reserved empty token.
async fn empty_virtual_file(State(state): State<AppState>) -> Response {
    serve_virtual_file(state, String::new()).await
}

async fn virtual_file(State(state): State<AppState>, Path(token): Path<String>) -> Response {
    serve_virtual_file(state, token).await
}

async fn serve_virtual_file(state: AppState, token: String) -> Response {
    match state.virtual_files.resolve(&token).await {
        Ok(file) => {
            let mut response = file_response(file.bytes, file.media_type);
            // A non-empty token is immutable once issued; the empty
            // sentinel carries no cache hint.
            if !token.is_empty() {
                response.headers_mut().insert(
                    CACHE_CONTROL,
                    HeaderValue::from_static(VIRTUAL_FILE_CACHE_CONTROL),
                );
            }
            response
        }
        Err(err) => err.into_response(),
    }
}

async fn public_file(
    State(state): State<AppState>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Response {
    let notebook = headers
        .get(NOTEBOOK_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(NotebookId::from);

    match state.public_files.serve(notebook.as_ref(), &path).await {
        Ok(file) => file_response(file.bytes, file.media_type),
        Err(err) => err.into_response(),
    }
}

async fn service_worker() -> Response {
    (
        [(CONTENT_TYPE, "application/javascript")],
        SERVICE_WORKER_JS,
    )
        .into_response()
}

/// Catch-all for the fixed set of top-level static files.
async fn static_asset(State(state): State<AppState>, uri: Uri) -> Response {
    let name = uri.path().trim_start_matches('/');
    if !STATIC_ALLOWLIST.is_match(name) {
        return ServeError::NotFound.into_response();
    }

    match tokio::fs::read(state.static_root.join(name)).await {
        Ok(bytes) => file_response(bytes, media::media_type(name)),
        Err(_) => ServeError::NotFound.into_response(),
    }
}

/// 200 response with an inferred media type, or none at all — an unmapped
/// extension sends no header rather than a guess.
fn file_response(bytes: Vec<u8>, media_type: Option<&'static str>) -> Response {
    let mut response = (StatusCode::OK, bytes).into_response();
    match media_type {
        Some(media_type) => {
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(media_type));
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    response
}

//! End-to-end tests for the HTTP surface.
//!
//! Drives the real router with in-memory collaborators and a tempdir
//! filesystem; no sockets involved.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use quill_server::{AppState, InMemoryRegistry, PageRenderer, routes};
use quill_types::NotebookId;
use quill_vfs::InMemoryStore;

struct FakeShell;

impl PageRenderer for FakeShell {
    fn home_page(&self) -> String {
        "<html>home</html>".to_string()
    }

    fn notebook_page(&self, file_key: &str) -> String {
        format!("<html>notebook:{file_key}</html>")
    }
}

/// Router wired to a tempdir: notebook `nb1` at `<tmp>/proj/nb.py` with a
/// populated `public/`, plus a static root holding `favicon.ico`.
fn setup() -> (Router, Arc<InMemoryStore>, TempDir) {
    let dir = TempDir::new().unwrap();

    let proj = dir.path().join("proj");
    std::fs::create_dir_all(proj.join("public")).unwrap();
    std::fs::write(proj.join("nb.py"), "# notebook").unwrap();
    std::fs::write(proj.join("public/report.csv"), "a,b\n1,2\n").unwrap();
    std::fs::write(proj.join("secret.txt"), "secret").unwrap();

    let static_root = dir.path().join("static");
    std::fs::create_dir_all(&static_root).unwrap();
    std::fs::write(static_root.join("favicon.ico"), b"icon-bytes").unwrap();

    let registry = Arc::new(InMemoryRegistry::new());
    registry.register(NotebookId::new("nb1"), proj.join("nb.py"));

    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(store.clone(), registry, Arc::new(FakeShell), static_root);

    (routes::router(state), store, dir)
}

async fn get(
    router: &Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, HeaderMap, Vec<u8>) {
    let mut request = Request::builder().uri(uri);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    let response = router
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}

// ============================================================================
// /@file/
// ============================================================================

#[tokio::test]
async fn test_virtual_file_roundtrip() {
    let (router, store, _dir) = setup();
    store.publish("chart.png", b"fakepng".to_vec());

    let (status, headers, body) = get(&router, "/@file/7-chart.png", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"fakepng");
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "image/png");
    assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "max-age=86400");
}

#[tokio::test]
async fn test_virtual_file_empty_token() {
    let (router, _store, _dir) = setup();

    let (status, headers, body) = get(&router, "/@file/", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "application/octet-stream"
    );
    assert!(headers.get(header::CACHE_CONTROL).is_none());
}

#[tokio::test]
async fn test_virtual_file_malformed_token() {
    let (router, _store, _dir) = setup();

    let (status, _, _) = get(&router, "/@file/chart.png", &[]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = get(&router, "/@file/12a-foo.png", &[]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_virtual_file_absent_buffer() {
    let (router, _store, _dir) = setup();

    let (status, _, _) = get(&router, "/@file/3-ghost.bin", &[]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_virtual_file_unknown_type_omits_header() {
    let (router, store, _dir) = setup();
    store.publish("blob.xyz", vec![1, 2, 3]);

    let (status, headers, body) = get(&router, "/@file/3-blob.xyz", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, vec![1, 2, 3]);
    assert!(headers.get(header::CONTENT_TYPE).is_none());
}

// ============================================================================
// /public/
// ============================================================================

#[tokio::test]
async fn test_public_file_with_notebook_header() {
    let (router, _store, _dir) = setup();

    let (status, headers, body) =
        get(&router, "/public/report.csv", &[("X-Notebook-Id", "nb1")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"a,b\n1,2\n");
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "text/csv");
}

#[tokio::test]
async fn test_public_file_without_header_is_not_found() {
    let (router, _store, _dir) = setup();

    let (status, _, _) = get(&router, "/public/report.csv", &[]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_file_empty_header_is_not_found() {
    let (router, _store, _dir) = setup();

    let (status, _, _) = get(&router, "/public/report.csv", &[("X-Notebook-Id", "")]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_traversal_is_denied() {
    let (router, _store, _dir) = setup();

    let (status, _, body) = get(
        &router,
        "/public/../secret.txt",
        &[("X-Notebook-Id", "nb1")],
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, b"Access denied");
}

#[tokio::test]
async fn test_public_unknown_notebook_is_not_found() {
    let (router, _store, _dir) = setup();

    let (status, _, _) = get(
        &router,
        "/public/report.csv",
        &[("X-Notebook-Id", "someone-else")],
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_file_idempotent() {
    let (router, _store, _dir) = setup();

    let first = get(&router, "/public/report.csv", &[("X-Notebook-Id", "nb1")]).await;
    let second = get(&router, "/public/report.csv", &[("X-Notebook-Id", "nb1")]).await;
    assert_eq!(first.2, second.2);
}

// ============================================================================
// Service worker, index, static files
// ============================================================================

#[tokio::test]
async fn test_service_worker_script() {
    let (router, _store, _dir) = setup();

    let (status, headers, body) = get(&router, "/public-files-sw.js", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "application/javascript"
    );
    let script = String::from_utf8(body).unwrap();
    assert!(script.contains("X-Notebook-Id"));
    assert!(script.contains("notebookId"));
}

#[tokio::test]
async fn test_index_home_page() {
    let (router, _store, _dir) = setup();

    let (status, _, body) = get(&router, "/", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<html>home</html>");
}

#[tokio::test]
async fn test_index_notebook_page() {
    let (router, _store, _dir) = setup();

    let (status, _, body) = get(&router, "/?file=nb.py", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<html>notebook:nb.py</html>");
}

#[tokio::test]
async fn test_allowlisted_static_file() {
    let (router, _store, _dir) = setup();

    let (status, headers, body) = get(&router, "/favicon.ico", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"icon-bytes");
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "image/x-icon");
}

#[tokio::test]
async fn test_unlisted_fallback_is_not_found() {
    let (router, _store, _dir) = setup();

    let (status, _, _) = get(&router, "/secret.txt", &[]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = get(&router, "/index.html", &[]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

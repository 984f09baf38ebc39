//! Quill server binary.
//!
//! ## Usage
//!
//! ```bash
//! # Serve with defaults (port 2718, ./static frontend)
//! quill-server
//!
//! # Register notebooks and pick a port
//! quill-server --port 8080 notebooks/report.py notebooks/scratch.py
//! ```

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use quill_server::constants::DEFAULT_PORT;
use quill_server::{AppState, DirShell, HttpServer, InMemoryRegistry, ServerConfig};
use quill_types::NotebookId;
use quill_vfs::InMemoryStore;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn print_usage() {
    eprintln!(
        r#"quill-server - HTTP asset server for quill notebooks

USAGE:
    quill-server [OPTIONS] [NOTEBOOK ...]

ARGS:
    NOTEBOOK                      Notebook source files to register; each is
                                  served under its file stem as notebook id

OPTIONS:
    --port <PORT>                 HTTP port (default: {port})
    --static-root <DIR>           Prebuilt frontend directory (default: static)
    --help, -h                    Show this help

EXAMPLES:
    quill-server                              # Serve on port {port}
    quill-server --port 8080 report.py        # Register report.py as "report"
"#,
        port = DEFAULT_PORT
    );
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut port = DEFAULT_PORT;
    let mut static_root = PathBuf::from("static");
    let mut notebooks: Vec<PathBuf> = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            "--port" => match args.next().and_then(|value| value.parse().ok()) {
                Some(p) => port = p,
                None => {
                    eprintln!("--port requires a port number");
                    return ExitCode::FAILURE;
                }
            },
            "--static-root" => match args.next() {
                Some(dir) => static_root = PathBuf::from(dir),
                None => {
                    eprintln!("--static-root requires a directory");
                    return ExitCode::FAILURE;
                }
            },
            other if other.starts_with('-') => {
                eprintln!("Unknown option: {other}");
                print_usage();
                return ExitCode::FAILURE;
            }
            other => notebooks.push(PathBuf::from(other)),
        }
    }

    let registry = Arc::new(InMemoryRegistry::new());
    for notebook in &notebooks {
        let id = notebook
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("notebook")
            .to_string();
        tracing::info!(id = %id, path = %notebook.display(), "registered notebook");
        registry.register(NotebookId::new(id), notebook.clone());
    }

    let store = Arc::new(InMemoryStore::new());
    let templates = Arc::new(DirShell::new(&static_root));
    let state = AppState::new(store, registry, templates, static_root.clone());
    let config = ServerConfig::new(port, static_root);

    if let Err(e) = HttpServer::new(config, state).run().await {
        tracing::error!("Server error: {e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

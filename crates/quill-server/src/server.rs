//! HTTP server lifecycle.

use anyhow::Context;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Owns the listener loop for one configured server.
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Pair a configuration with its wired state.
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Bind and serve until the surrounding task is cancelled.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("binding {addr}"))?;
        tracing::info!(%addr, "quill server listening");

        let app = routes::router(self.state);
        axum::serve(listener, app).await?;
        Ok(())
    }
}

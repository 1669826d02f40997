// ABOUTME: HTTP server bootstrap for the Mind Forecast API
// ABOUTME: Binds the listener and serves the assembled router until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mind Forecast

//! Server bootstrap: bind, serve, shut down on ctrl-c.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::routes::{router, ServerResources};

/// Bind the configured port and serve the API until shutdown
///
/// # Errors
///
/// Returns an error when the port cannot be bound or the server fails while
/// running.
pub async fn serve(resources: Arc<ServerResources>) -> AppResult<()> {
    let addr = format!("0.0.0.0:{}", resources.config.http_port);
    let app = router(Arc::clone(&resources));

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("failed to bind {addr}: {e}")).with_source(e))?;

    info!(%addr, "Mind Forecast API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("server error: {e}")).with_source(e))
}

async fn shutdown_signal() {
    // Shutdown is best-effort; if the signal handler cannot be installed the
    // server simply runs until killed
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;
use crate::upstream::PageRankClient;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Builds the upstream client, assembles the router, binds the listener,
/// and serves until the process exits.
///
/// # Errors
///
/// Returns an error if the upstream client cannot be built, the bind
/// address is invalid, the bind fails, or a server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let ranker = PageRankClient::new(
        config.upstream_url.clone(),
        config.api_key.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    )?;

    let state = AppState {
        ranker: Arc::new(ranker),
    };

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

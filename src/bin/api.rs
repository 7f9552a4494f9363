use anyhow::Result;
use movie_lookup::{
    app_state::AppState, config::Config, fetcher::HttpPageFetcher, routes, telemetry,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    telemetry::init(config.log_format());

    let fetcher = HttpPageFetcher::new(config.upstream_base_url().clone());
    let app = routes::router(AppState::new(Arc::new(fetcher)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(
        addr = %config.bind_addr(),
        upstream = %config.upstream_base_url(),
        "movie-lookup listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

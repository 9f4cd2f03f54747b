mod error;
mod routes;
mod state;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sales_insights::AsyncSalesSdk;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use state::AppState;

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut builder = AsyncSalesSdk::builder();
    if let Ok(url) = env::var("SALES_SOURCE_URL") {
        builder = builder.source_url(url);
    }
    if let Some(secs) = env_parse::<u64>("SALES_TIMEOUT_SECS") {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Ok(dir) = env::var("SALES_SNAPSHOT_DIR") {
        builder = builder.snapshot_dir(dir);
    }
    if let Some(offline) = env_parse::<bool>("SALES_OFFLINE") {
        builder = builder.offline(offline);
    }
    let sdk = builder.build().await.context("failed to build sales SDK")?;

    let state = Arc::new(AppState { sdk });
    let app = routes::router(state.clone());

    let port = env_parse::<u16>("PORT").unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    // Serve the empty collection until the first load finishes; a failed load
    // can be retried through /api/initialize-database.
    tokio::spawn(async move {
        if let Err(e) = state.sdk.initialize().await {
            tracing::error!(error = %e, "initial dataset load failed");
        }
    });

    axum::serve(listener, app).await?;
    Ok(())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment variable");
            None
        }
    }
}

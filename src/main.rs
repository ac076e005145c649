// src/main.rs

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use heroku_fixture::{app, routes::root::RUNTIME_VERSION, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let port = config.port;
    tracing::debug!(node_env = %config.node_env, dyno = ?config.dyno, "configuration loaded");

    let state = AppState::new(config);

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(port, "server starting on port {port}");
    tracing::info!(version = RUNTIME_VERSION, "rustc version: {RUNTIME_VERSION}");

    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}

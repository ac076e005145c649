use axum::{routing::get, Router};

use crate::AppState;

pub mod env;
pub mod health;
pub mod root;

/// Register the fixture's endpoints.
///
/// - `GET /`       greeting with timestamp and runtime version
/// - `GET /health` uptime and memory snapshot
/// - `GET /env`    environment-derived settings
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::greet))
        .route("/health", get(health::health))
        .route("/env", get(env::env_info))
        .with_state(state)
}

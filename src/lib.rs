//! Heroku fixture - a tiny JSON service used to check that the host platform
//! can build, boot and route traffic to an app.
//!
//! - `GET /`       greeting
//! - `GET /health` liveness with uptime and memory
//! - `GET /env`    `NODE_ENV` / `PORT` / `DYNO` as the process sees them

use std::{sync::Arc, time::Instant};

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod models;
pub mod process;
pub mod routes;

pub use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Boot instant, the zero point for `/health` uptime.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}

/// Full application: routes plus CORS and request tracing.
pub fn app(state: AppState) -> Router {
    // Permissive CORS, the fixture is probed from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

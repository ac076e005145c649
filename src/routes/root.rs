// src/routes/root.rs

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::models::Greeting;

pub const GREETING: &str = "Hello from Bun on Heroku!";
pub const RUNTIME: &str = "Rust";

/// Toolchain version the binary was compiled with.
pub const RUNTIME_VERSION: &str = env!("FIXTURE_RUSTC_VERSION");

pub async fn greet() -> Json<Greeting> {
    Json(Greeting {
        message: GREETING,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        bun_version: RUNTIME_VERSION,
        runtime: RUNTIME,
    })
}

// src/routes/health.rs

use axum::{extract::State, Json};

use crate::{
    models::Health,
    process::{uptime_secs, MemoryUsage},
    AppState,
};

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "healthy",
        uptime: uptime_secs(state.started_at),
        memory: MemoryUsage::sample(),
    })
}

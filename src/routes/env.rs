// src/routes/env.rs

use axum::{extract::State, Json};

use crate::{models::EnvInfo, AppState};

pub async fn env_info(State(state): State<AppState>) -> Json<EnvInfo> {
    let cfg = &state.config;
    Json(EnvInfo {
        node_env: cfg.node_env.clone(),
        port: cfg.port,
        heroku: cfg.on_heroku(),
    })
}

// src/models/mod.rs

use serde::Serialize;

use crate::process::MemoryUsage;

// ───────────────────────────────────────
// GET /
// ───────────────────────────────────────
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
    /// RFC 3339, UTC, millisecond precision.
    pub timestamp: String,
    pub bun_version: &'static str,
    pub runtime: &'static str,
}

// ───────────────────────────────────────
// GET /health
// ───────────────────────────────────────
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub uptime: f64,
    pub memory: MemoryUsage,
}

// ───────────────────────────────────────
// GET /env
// ───────────────────────────────────────
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EnvInfo {
    pub node_env: String,
    pub port: u16,
    pub heroku: bool,
}

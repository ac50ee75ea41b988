//! HTTP request handlers
//!
//! The vib routes acknowledge immediately with a fixed plain-text body; they
//! never wait for, or reflect, a device response.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::api::server::AppContext;
use crate::serial::Command;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    module: String,
    version: String,
    /// "connected" or "disconnected", captured at startup
    serial: String,
}

/// GET /vib/on - write '1' to the vibration controller
pub async fn vib_on(State(ctx): State<AppContext>) -> &'static str {
    info!("Turning VIB on...");
    ctx.link.send(Command::On);
    "VIB On"
}

/// GET /vib/off - write '0' to the vibration controller
pub async fn vib_off(State(ctx): State<AppContext>) -> &'static str {
    info!("Turning VIB off...");
    ctx.link.send(Command::Off);
    "VIB Off"
}

/// GET /health - liveness plus the serial link state
pub async fn health(State(ctx): State<AppContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "vibrelay".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        serial: ctx.link.status().as_str().to_string(),
    })
}

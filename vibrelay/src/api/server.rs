//! HTTP router setup
//!
//! Sets up the Axum router with the vib command routes, the health endpoint,
//! and a static-file fallback for the browser page.

use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::serial::SerialLink;

/// Shared application context passed to all handlers
///
/// Both vib routes write through the same link; there is exactly one serial
/// connection per process.
#[derive(Clone)]
pub struct AppContext {
    pub link: Arc<SerialLink>,
}

/// Build the application router
///
/// Anything that is not an API route falls through to the static asset
/// directory, with `index.html` served for the root.
pub fn create_router(ctx: AppContext, public_dir: &Path) -> Router {
    Router::new()
        .route("/vib/on", get(handlers::vib_on))
        .route("/vib/off", get(handlers::vib_off))
        .route("/health", get(handlers::health))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(ctx)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

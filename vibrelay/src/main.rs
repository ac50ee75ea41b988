//! vibrelay - Main entry point
//!
//! Opens the serial link to the vibration controller (continuing without it
//! if the open fails), then serves the camera demo page and the vib command
//! routes over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vibrelay::api::{self, AppContext};
use vibrelay::config::{self, Config};
use vibrelay::serial::SerialLink;

/// Command-line arguments for vibrelay
#[derive(Parser, Debug)]
#[command(name = "vibrelay")]
#[command(about = "Camera demo page server with serial vibration control")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::default_port(), env = "VIBRELAY_PORT")]
    port: u16,

    /// Serial device path of the vibration controller
    #[arg(short, long, default_value_t = config::default_serial_path(), env = "VIBRELAY_SERIAL_PATH")]
    serial_path: String,

    /// Serial baud rate (must match the microcontroller sketch)
    #[arg(short, long, default_value_t = config::default_baud_rate(), env = "VIBRELAY_BAUD_RATE")]
    baud_rate: u32,

    /// Directory of browser-facing static assets
    #[arg(long, default_value = "public", env = "VIBRELAY_PUBLIC_DIR")]
    public_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vibrelay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = Config {
        port: args.port,
        serial_path: args.serial_path,
        baud_rate: args.baud_rate,
        public_dir: args.public_dir,
    };

    info!("Starting vibrelay on port {}", config.port);
    info!("Serving static assets from {}", config.public_dir.display());

    // Open the serial link once, before serving. A failed open is logged and
    // the server starts anyway; commands are then dropped until restart.
    let link = match SerialLink::open(&config.serial_path, config.baud_rate) {
        Ok(link) => link,
        Err(e) => {
            error!("Error opening serial port {}: {}", config.serial_path, e);
            SerialLink::disconnected()
        }
    };

    // Build the application router
    let ctx = AppContext {
        link: Arc::new(link),
    };
    let app = api::create_router(ctx, &config.public_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}

//! # vibrelay
//!
//! Backend for the camera preview demo: serves the browser page and forwards
//! vibration on/off commands to a microcontroller over a serial line.
//!
//! The browser piece and the serial piece are independent; they are bundled
//! only as a demo page and its control backend.

pub mod api;
pub mod config;
pub mod error;
pub mod serial;

pub use config::Config;
pub use error::{Error, Result};
pub use serial::SerialLink;

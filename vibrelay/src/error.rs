//! Error types for vibrelay
//!
//! Defines module-specific error types using thiserror for clear error propagation.

use thiserror::Error;

/// Main error type for vibrelay
#[derive(Error, Debug)]
pub enum Error {
    /// Serial port open or configuration errors
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type using vibrelay Error
pub type Result<T> = std::result::Result<T, Error>;

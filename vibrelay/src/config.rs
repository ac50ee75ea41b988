//! vibrelay configuration
//!
//! All knobs default to the values the demo was built around, so running the
//! binary with no flags reproduces the original behavior exactly.

use std::path::PathBuf;

/// Default HTTP listen port
pub fn default_port() -> u16 {
    3000
}

/// Default serial device path for the vibration controller
pub fn default_serial_path() -> String {
    "/dev/ttyACM0".to_string()
}

/// Default serial baud rate (must match the microcontroller sketch)
pub fn default_baud_rate() -> u32 {
    9600
}

/// Default directory of browser-facing static assets
pub fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port
    pub port: u16,
    /// Serial device path
    pub serial_path: String,
    /// Serial baud rate
    pub baud_rate: u32,
    /// Static asset directory served to the browser
    pub public_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            serial_path: default_serial_path(),
            baud_rate: default_baud_rate(),
            public_dir: default_public_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_constants() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.serial_path, "/dev/ttyACM0");
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.public_dir, PathBuf::from("public"));
    }
}

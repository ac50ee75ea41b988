//! Serial link resource handle
//!
//! Owns the write half of the single serial connection and the status that
//! resulted from the startup open. Handlers receive it through the server
//! context instead of a module-level global.

use std::fmt;
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::Result;

use super::reader;

/// Read timeout for the inbound half. Timeouts just poll; they are not errors.
const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Commands understood by the vibration controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    On,
    Off,
}

impl Command {
    /// The single ASCII byte written to the device for this command
    pub fn byte(self) -> u8 {
        match self {
            Command::On => b'1',
            Command::Off => b'0',
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::On => write!(f, "on"),
            Command::Off => write!(f, "off"),
        }
    }
}

/// Outcome of the startup open, queryable by handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Connected,
    Disconnected,
}

impl LinkStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkStatus::Connected => "connected",
            LinkStatus::Disconnected => "disconnected",
        }
    }
}

/// The process-wide serial connection handle
///
/// A link is either connected (writes go to the device) or disconnected
/// (writes are dropped with a log line). The state is fixed at construction;
/// there is no reconnection.
pub struct SerialLink {
    writer: Mutex<Option<Box<dyn Write + Send>>>,
}

impl SerialLink {
    /// Open the serial device and start the inbound reader thread.
    ///
    /// The reader half runs until end of stream or process exit; the
    /// connection is never closed or reopened.
    pub fn open(path: &str, baud_rate: u32) -> Result<Self> {
        let port = serialport::new(path, baud_rate)
            .timeout(READ_TIMEOUT)
            .open()?;

        // The reader runs for the life of the process; its handle is never joined
        let inbound = port.try_clone()?;
        let _ = reader::spawn(inbound);

        info!("Serial port opened: {} at {} baud", path, baud_rate);

        Ok(Self {
            writer: Mutex::new(Some(Box::new(port))),
        })
    }

    /// A link whose startup open failed. Commands sent here are dropped.
    pub fn disconnected() -> Self {
        Self {
            writer: Mutex::new(None),
        }
    }

    /// A connected link over an arbitrary writer, for tests
    pub fn from_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(Some(writer)),
        }
    }

    /// Write one command byte, fire-and-forget.
    ///
    /// Write failures are logged and swallowed; the caller's HTTP response
    /// does not depend on the device.
    pub fn send(&self, command: Command) {
        let mut writer = self.writer.lock().unwrap();
        match writer.as_mut() {
            Some(w) => {
                if let Err(e) = w.write_all(&[command.byte()]).and_then(|_| w.flush()) {
                    warn!("Serial write failed for vib {}: {}", command, e);
                }
            }
            None => {
                warn!("Serial link not connected, dropping vib {} command", command);
            }
        }
    }

    /// Status captured at startup
    pub fn status(&self) -> LinkStatus {
        if self.writer.lock().unwrap().is_some() {
            LinkStatus::Connected
        } else {
            LinkStatus::Disconnected
        }
    }

    pub fn is_connected(&self) -> bool {
        self.status() == LinkStatus::Connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CaptureWriter {
        bytes: Arc<Mutex<Vec<u8>>>,
    }

    impl Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_command_bytes() {
        assert_eq!(Command::On.byte(), 0x31);
        assert_eq!(Command::Off.byte(), 0x30);
    }

    #[test]
    fn test_send_writes_single_byte() {
        let capture = CaptureWriter::default();
        let link = SerialLink::from_writer(Box::new(capture.clone()));

        link.send(Command::On);
        assert_eq!(*capture.bytes.lock().unwrap(), vec![b'1']);

        link.send(Command::Off);
        assert_eq!(*capture.bytes.lock().unwrap(), vec![b'1', b'0']);
    }

    #[test]
    fn test_disconnected_link_drops_commands() {
        let link = SerialLink::disconnected();
        assert_eq!(link.status(), LinkStatus::Disconnected);
        assert!(!link.is_connected());

        // Must not panic or error; the command is simply dropped
        link.send(Command::On);
        link.send(Command::Off);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let link = SerialLink::from_writer(Box::new(FailingWriter));
        assert!(link.is_connected());

        // The failure is logged, not propagated
        link.send(Command::On);
    }
}

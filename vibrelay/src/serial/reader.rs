//! Inbound serial reader
//!
//! The serial crate is blocking I/O, so inbound data is handled on a
//! dedicated OS thread rather than a tokio task. Lines from the device are
//! logged; they are not correlated with any HTTP request.

use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::thread::{self, JoinHandle};

use tracing::{info, warn};

/// Spawn the reader thread for the inbound half of the connection.
///
/// Runs until end of stream, a hard read error, or process exit.
pub(crate) fn spawn<R>(inbound: R) -> JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || read_loop(inbound))
}

fn read_loop<R: Read>(inbound: R) {
    let mut reader = BufReader::new(inbound);
    let mut line = String::new();
    loop {
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("Serial reader reached end of stream");
                break;
            }
            Ok(_) => {
                info!("Data from device: {}", line.trim_end());
                line.clear();
            }
            // Read timeouts just poll; a partial line stays buffered
            Err(e) if e.kind() == ErrorKind::TimedOut => continue,
            Err(e) => {
                warn!("Serial read failed: {}", e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reader_exits_at_end_of_stream() {
        let handle = spawn(Cursor::new(b"ready\nvib ack\n".to_vec()));
        handle.join().expect("reader thread panicked");
    }

    #[test]
    fn test_reader_exits_on_hard_error() {
        struct BrokenPort;

        impl Read for BrokenPort {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(ErrorKind::BrokenPipe, "gone"))
            }
        }

        let handle = spawn(BrokenPort);
        handle.join().expect("reader thread panicked");
    }
}

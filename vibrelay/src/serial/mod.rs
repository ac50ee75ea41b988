//! Serial link to the vibration controller
//!
//! One connection for the whole process: opened once at startup, shared by
//! the HTTP handlers, never reopened. Outbound traffic is raw single-byte
//! commands; inbound traffic is newline-framed text that is logged and
//! otherwise discarded.

mod link;
mod reader;

pub use link::{Command, LinkStatus, SerialLink};

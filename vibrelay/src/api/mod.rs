//! HTTP surface for vibrelay
//!
//! Two device-command routes, a health endpoint, and static serving of the
//! browser assets.

pub mod handlers;
pub mod server;

pub use server::{create_router, AppContext};

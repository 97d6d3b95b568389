//! # Warden Shared
//!
//! Configuration structures and wire-level response types shared between
//! the core, infrastructure and API crates.

pub mod config;
pub mod types;

pub use config::AppConfig;
pub use types::{ErrorResponse, WebResponse};

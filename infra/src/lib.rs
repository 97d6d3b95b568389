//! # Warden Infrastructure
//!
//! Concrete implementations of the core repository interfaces:
//!
//! - **database**: MySQL user repository and unit of work using SQLx
//! - **cache**: Redis-backed revocation store

pub mod cache;
pub mod database;

use thiserror::Error;

/// Errors raised while setting up infrastructure services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

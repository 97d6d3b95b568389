//! Redis-backed cache services

mod revocation_store;

pub use revocation_store::RedisRevocationStore;

//! # Warden Core
//!
//! Core business logic and domain layer for the Warden backend.
//! This crate contains the token codecs, revocation store, unit of work
//! boundary and authentication service, along with the repository
//! interfaces and error types they are built on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

//! Token codec module
//!
//! Minting and verification of HMAC-signed JWTs for the access and refresh
//! domains, with a pluggable signing strategy and token fingerprinting for
//! the revocation store.

mod codec;
mod config;
mod signer;

#[cfg(test)]
mod tests;

pub use codec::{fingerprint, TokenCodec};
pub use config::TokenCodecConfig;
pub use signer::{FailingSigner, Hs256Signer, SigningStrategy};

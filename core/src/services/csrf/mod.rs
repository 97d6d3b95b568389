//! CSRF token codec
//!
//! Single-use, path-bound, short-lived tokens. Verification and
//! consumption are one logical step: a token that verifies is revoked
//! before the caller sees success, closing the replay window.

mod codec;
mod config;

pub use codec::CsrfCodec;
pub use config::CsrfCodecConfig;

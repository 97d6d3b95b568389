//! Revocation store: a durable set of revoked token fingerprints with
//! per-entry expiry.

pub mod memory;
pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub use memory::InMemoryRevocationStore;
pub use r#trait::{RevocationDomain, RevocationStore};

//! Repository interfaces and in-process implementations.
//!
//! Concrete database/Redis implementations live in the infrastructure
//! crate; this module defines the traits plus the in-memory revocation
//! store fallback and the mocks used throughout the test suites.

pub mod revocation;
pub mod uow;
pub mod user;

pub use revocation::{InMemoryRevocationStore, RevocationDomain, RevocationStore};
pub use uow::{MockUnitOfWork, UnitOfWork};
pub use user::{MockUserRepository, UserRepository, UserTxSession};

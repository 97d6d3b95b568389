//! Unit of work: the transactional boundary for write paths.

pub mod mock;
pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub use mock::MockUnitOfWork;
pub use r#trait::{panic_message, UnitOfWork};

//! MySQL implementations of the core persistence interfaces

mod unit_of_work;
mod user_repository_impl;

pub use unit_of_work::{MySqlTxSession, MySqlUnitOfWork};
pub use user_repository_impl::MySqlUserRepository;

//! Unit of work trait.

use futures_util::future::BoxFuture;

use crate::errors::DomainResult;
use crate::repositories::user::UserTxSession;

/// Wraps a sequence of persistence operations in one atomic transaction.
///
/// `run` begins a transaction, hands the callback a session bound to it,
/// commits when the callback returns `Ok` and rolls back on `Err`. A panic
/// inside the callback also rolls back and is reported as an error instead
/// of unwinding further, so the transaction is never left open.
///
/// `run` is the only place that decides commit versus rollback; business
/// logic communicates intent purely through its returned `Result`.
pub trait UnitOfWork: Send + Sync {
    type Session: UserTxSession;

    fn run<'a, T, F>(&'a self, work: F) -> BoxFuture<'a, DomainResult<T>>
    where
        T: Send + 'a,
        F: for<'s> FnOnce(&'s mut Self::Session) -> BoxFuture<'s, DomainResult<T>> + Send + 'a;
}

/// Best-effort description of a caught panic payload.
pub fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "transaction callback panicked".to_string()
    }
}

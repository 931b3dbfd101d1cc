//! Orchestrators: turn validated input into ledger records and drive the store.
//!
//! Both services are generic over [`LedgerStore`](crate::store::LedgerStore)
//! and own their handle to it (usually a shared `Arc<InMemoryLedgerStore>`).

pub mod account;
pub mod transaction;

pub use account::AccountService;
pub use transaction::TransactionService;

use bank_core::LedgerError;

/// Log a failed operation and hand the error back for propagation.
pub(crate) fn log_failure(operation: &'static str, err: LedgerError) -> LedgerError {
    tracing::error!(operation, code = err.code(), error = %err, "ledger operation failed");
    err
}

//! In-memory account ledger.
//!
//! - [`store`]: the [`LedgerStore`] boundary and its single-lock in-memory
//!   implementation, the only place balances and history are mutated.
//! - [`services`]: orchestrators that build transaction records and drive the
//!   store, including the two-step (non-atomic) transfer.
//!
//! Pure domain logic only: no IO, no HTTP.

pub mod account;
pub mod services;
pub mod store;
pub mod transaction;

#[cfg(test)]
mod integration_tests;

pub use account::{Account, validate_initial_balance};
pub use services::{AccountService, TransactionService};
pub use store::{InMemoryLedgerStore, LedgerStore};
pub use transaction::{Transaction, TransactionType, Transfer, validate_amount};

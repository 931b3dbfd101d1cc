//! Ledger store boundary.
//!
//! Defines the narrow interface the orchestrators drive, plus the in-memory
//! implementation the service runs on.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryLedgerStore;
pub use r#trait::LedgerStore;

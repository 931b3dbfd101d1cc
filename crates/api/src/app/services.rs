use std::sync::Arc;

use bank_ledger::{AccountService, InMemoryLedgerStore, TransactionService};

type SharedStore = Arc<InMemoryLedgerStore>;

/// Orchestrators the HTTP handlers call into, all backed by one ledger store.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub accounts: AccountService<SharedStore>,
    pub transactions: TransactionService<SharedStore>,
}

impl AppServices {
    pub fn new(store: SharedStore) -> Self {
        Self {
            accounts: AccountService::new(store.clone()),
            transactions: TransactionService::new(store),
        }
    }
}

/// Wire services over a fresh, empty in-memory ledger.
pub fn build_services() -> AppServices {
    tracing::debug!("setting up in-memory ledger store");
    AppServices::new(Arc::new(InMemoryLedgerStore::new()))
}

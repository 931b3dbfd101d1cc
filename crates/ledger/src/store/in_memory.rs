use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bank_core::{AccountId, Entity, LedgerError, LedgerResult};

use super::r#trait::LedgerStore;
use crate::account::Account;
use crate::transaction::Transaction;

#[derive(Debug, Default)]
struct LedgerState {
    accounts: HashMap<AccountId, Account>,
    transactions: HashMap<AccountId, Vec<Transaction>>,
}

/// In-memory ledger guarded by one store-wide reader/writer lock.
///
/// Mutations take the write lock for their whole critical section; reads take
/// the read lock and may run concurrently with each other. Operations on
/// different accounts are serialized by the same lock: there is no per-account
/// parallelism.
///
/// Nothing is persisted; the state lives as long as the instance.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    state: RwLock<LedgerState>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    // No critical section can panic half-way through a mutation, so the state
    // behind a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, LedgerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LedgerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn create_account(&self, account: Account) {
        let id = account.id();
        let mut state = self.write();

        tracing::debug!(account_id = %id, owner = %account.owner, balance = account.balance, "storing account");
        state.accounts.insert(id, account);
        state.transactions.insert(id, Vec::new());
    }

    fn get_account_by_id(&self, id: AccountId) -> LedgerResult<Account> {
        let state = self.read();

        match state.accounts.get(&id) {
            Some(account) => Ok(account.clone()),
            None => {
                tracing::debug!(account_id = %id, "account not found");
                Err(LedgerError::AccountNotFound)
            }
        }
    }

    fn get_all_accounts(&self) -> Vec<Account> {
        self.read().accounts.values().cloned().collect()
    }

    fn create_transaction(&self, transaction: Transaction) -> LedgerResult<()> {
        let mut state = self.write();
        let LedgerState {
            accounts,
            transactions,
        } = &mut *state;

        let account = accounts
            .get_mut(&transaction.account_id)
            .ok_or(LedgerError::AccountNotFound)?;

        // Check and update under the same write guard as the append below.
        let balance = account.balance_after(transaction.kind, transaction.amount)?;
        account.balance = balance;

        tracing::debug!(
            account_id = %transaction.account_id,
            transaction_id = %transaction.id(),
            kind = %transaction.kind,
            amount = transaction.amount,
            balance,
            "transaction applied"
        );

        transactions
            .entry(transaction.account_id)
            .or_default()
            .push(transaction);

        Ok(())
    }

    fn get_transactions_by_account_id(&self, id: AccountId) -> LedgerResult<Vec<Transaction>> {
        let state = self.read();

        state
            .transactions
            .get(&id)
            .cloned()
            .ok_or(LedgerError::AccountNotFound)
    }
}

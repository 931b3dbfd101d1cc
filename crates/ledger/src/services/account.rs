use bank_core::{AccountId, LedgerResult};

use super::log_failure;
use crate::account::{Account, validate_initial_balance};
use crate::store::LedgerStore;

/// Opens accounts and reads them back.
#[derive(Debug, Clone)]
pub struct AccountService<S> {
    store: S,
}

impl<S> AccountService<S>
where
    S: LedgerStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Open an account for `owner` with a fresh id.
    pub fn create_account(&self, owner: impl Into<String>, initial_balance: f64) -> LedgerResult<Account> {
        let owner = owner.into();
        tracing::debug!(%owner, initial_balance, "creating account");

        validate_initial_balance(initial_balance).map_err(|e| log_failure("create_account", e))?;

        let account = Account::new(AccountId::new(), owner, initial_balance);
        self.store.create_account(account.clone());

        tracing::debug!(account_id = %account.id, "account created");
        Ok(account)
    }

    pub fn get_account(&self, id: AccountId) -> LedgerResult<Account> {
        tracing::debug!(account_id = %id, "getting account");
        self.store
            .get_account_by_id(id)
            .map_err(|e| log_failure("get_account", e))
    }

    pub fn list_accounts(&self) -> Vec<Account> {
        let accounts = self.store.get_all_accounts();
        tracing::debug!(count = accounts.len(), "listed accounts");
        accounts
    }
}

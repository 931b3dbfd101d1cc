use std::sync::Arc;

use bank_core::{AccountId, LedgerResult};

use crate::account::Account;
use crate::transaction::Transaction;

/// Sole authority over account balances and transaction history.
///
/// ## Contract
///
/// - Every operation is synchronous and completes or fails without suspending
///   on external resources.
/// - Mutations (`create_account`, `create_transaction`) are linearized: the
///   balance check, the balance update and the history append of one
///   transaction happen in one critical section, so no reader ever observes a
///   balance without its transaction or the other way round.
/// - A failed `create_transaction` leaves balance and history untouched.
/// - Reads return copies; callers never hold handles into store state.
///
/// ## Errors
///
/// - `AccountNotFound`: the referenced account id is unknown.
/// - `InsufficientBalance`: a withdrawal exceeds the current balance.
pub trait LedgerStore: Send + Sync {
    /// Insert an account and give it an empty transaction history.
    ///
    /// Ids are pre-generated and unique, so there is no error path. The
    /// account is visible to reads as soon as this returns.
    fn create_account(&self, account: Account);

    /// Snapshot of one account.
    fn get_account_by_id(&self, id: AccountId) -> LedgerResult<Account>;

    /// Snapshot of every account, in unspecified order.
    fn get_all_accounts(&self) -> Vec<Account>;

    /// Apply one transaction to its account and append it to that account's
    /// history.
    fn create_transaction(&self, transaction: Transaction) -> LedgerResult<()>;

    /// History of one account in commit order.
    ///
    /// An existing account with no transactions yields an empty vector; an
    /// unknown account yields `AccountNotFound`.
    fn get_transactions_by_account_id(&self, id: AccountId) -> LedgerResult<Vec<Transaction>>;
}

impl<S> LedgerStore for Arc<S>
where
    S: LedgerStore + ?Sized,
{
    fn create_account(&self, account: Account) {
        (**self).create_account(account)
    }

    fn get_account_by_id(&self, id: AccountId) -> LedgerResult<Account> {
        (**self).get_account_by_id(id)
    }

    fn get_all_accounts(&self) -> Vec<Account> {
        (**self).get_all_accounts()
    }

    fn create_transaction(&self, transaction: Transaction) -> LedgerResult<()> {
        (**self).create_transaction(transaction)
    }

    fn get_transactions_by_account_id(&self, id: AccountId) -> LedgerResult<Vec<Transaction>> {
        (**self).get_transactions_by_account_id(id)
    }
}

use bank_core::{AccountId, LedgerResult};

use super::log_failure;
use crate::store::LedgerStore;
use crate::transaction::{Transaction, TransactionType, Transfer, validate_amount};

/// Builds transaction records and applies them through the store.
#[derive(Debug, Clone)]
pub struct TransactionService<S> {
    store: S,
}

impl<S> TransactionService<S>
where
    S: LedgerStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Apply one deposit or withdrawal to `account_id`.
    ///
    /// `AccountNotFound` and `InsufficientBalance` from the store come back
    /// unchanged.
    pub fn create_transaction(
        &self,
        account_id: AccountId,
        kind: TransactionType,
        amount: f64,
    ) -> LedgerResult<Transaction> {
        tracing::debug!(account_id = %account_id, %kind, amount, "creating transaction");
        validate_amount(amount).map_err(|e| log_failure("create_transaction", e))?;

        let transaction = Transaction::new(account_id, kind, amount);
        self.store
            .create_transaction(transaction.clone())
            .map_err(|e| log_failure("create_transaction", e))?;

        tracing::debug!(transaction_id = %transaction.id, "transaction created");
        Ok(transaction)
    }

    pub fn transactions_for_account(&self, account_id: AccountId) -> LedgerResult<Vec<Transaction>> {
        tracing::debug!(account_id = %account_id, "getting transactions");
        self.store
            .get_transactions_by_account_id(account_id)
            .map_err(|e| log_failure("transactions_for_account", e))
    }

    /// Move `amount` from `from` to `to` as a withdrawal followed by a deposit.
    ///
    /// The two steps are separate critical sections and no lock is held
    /// between them, so the pair is not atomic. If the withdrawal fails nothing
    /// changes. If the withdrawal commits and the deposit then fails (e.g. `to`
    /// does not exist), the source stays debited and nothing compensates it.
    pub fn transfer(&self, from: AccountId, to: AccountId, amount: f64) -> LedgerResult<Transfer> {
        tracing::debug!(from = %from, to = %to, amount, "transferring");
        validate_amount(amount).map_err(|e| log_failure("transfer", e))?;

        let withdrawal = Transaction::new(from, TransactionType::Withdrawal, amount);
        self.store
            .create_transaction(withdrawal.clone())
            .map_err(|e| log_failure("transfer", e))?;

        let deposit = Transaction::new(to, TransactionType::Deposit, amount);
        if let Err(err) = self.store.create_transaction(deposit.clone()) {
            tracing::warn!(
                from = %from,
                to = %to,
                amount,
                withdrawal_id = %withdrawal.id,
                "withdrawal committed but deposit failed; source account left debited"
            );
            return Err(log_failure("transfer", err));
        }

        tracing::debug!(withdrawal_id = %withdrawal.id, deposit_id = %deposit.id, "transfer completed");
        Ok(Transfer { withdrawal, deposit })
    }
}

use serde::{Deserialize, Serialize};

use bank_core::{AccountId, Entity, LedgerError, LedgerResult};

use crate::transaction::TransactionType;

/// A named balance-holding entity.
///
/// The ledger store owns every `Account`; callers only ever see copies.
/// `balance >= 0` holds after every committed transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub owner: String,
    pub balance: f64,
}

impl Account {
    pub fn new(id: AccountId, owner: impl Into<String>, balance: f64) -> Self {
        Self {
            id,
            owner: owner.into(),
            balance,
        }
    }

    /// Balance that results from applying one transaction, without mutating.
    ///
    /// A withdrawal larger than the balance fails with
    /// [`LedgerError::InsufficientBalance`]; a deposit whose result is no longer
    /// a finite number fails with [`LedgerError::InvalidAmount`].
    pub fn balance_after(&self, kind: TransactionType, amount: f64) -> LedgerResult<f64> {
        match kind {
            TransactionType::Deposit => {
                let balance = self.balance + amount;
                if !balance.is_finite() {
                    return Err(LedgerError::invalid_amount(format!(
                        "deposit of {amount} overflows the account balance"
                    )));
                }
                Ok(balance)
            }
            TransactionType::Withdrawal => {
                if self.balance < amount {
                    return Err(LedgerError::InsufficientBalance);
                }
                Ok(self.balance - amount)
            }
        }
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> AccountId {
        self.id
    }
}

/// Check an opening balance: finite and not negative.
pub fn validate_initial_balance(balance: f64) -> LedgerResult<()> {
    if !balance.is_finite() || balance < 0.0 {
        return Err(LedgerError::invalid_amount(format!(
            "initial balance must be a non-negative number, got {balance}"
        )));
    }
    Ok(())
}

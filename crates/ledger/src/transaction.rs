use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bank_core::{AccountId, Entity, LedgerError, LedgerResult, TransactionId};

/// Direction of a single-account balance mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
        }
    }
}

impl core::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deposit" => Ok(TransactionType::Deposit),
            "withdrawal" => Ok(TransactionType::Withdrawal),
            other => Err(LedgerError::unknown_type(other)),
        }
    }
}

/// Immutable record of one deposit or withdrawal against one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub account_id: AccountId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Always `> 0`.
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Build a record with a fresh id, stamped now.
    ///
    /// The amount is not checked here; see [`validate_amount`].
    pub fn new(account_id: AccountId, kind: TransactionType, amount: f64) -> Self {
        Self {
            id: TransactionId::new(),
            account_id,
            kind,
            amount,
            timestamp: Utc::now(),
        }
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> TransactionId {
        self.id
    }
}

/// The two records a completed transfer leaves behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub withdrawal: Transaction,
    pub deposit: Transaction,
}

/// Check a transaction amount: finite and strictly positive.
pub fn validate_amount(amount: f64) -> LedgerResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::invalid_amount(format!(
            "amount must be greater than zero, got {amount}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_parses_known_variants() {
        assert_eq!("deposit".parse::<TransactionType>(), Ok(TransactionType::Deposit));
        assert_eq!("withdrawal".parse::<TransactionType>(), Ok(TransactionType::Withdrawal));
    }

    #[test]
    fn unknown_transaction_type_is_rejected() {
        let err = "refund".parse::<TransactionType>().unwrap_err();
        assert_eq!(err, LedgerError::unknown_type("refund"));
        assert_eq!(err.code(), "UNKNOWN");
    }

    #[test]
    fn transaction_serializes_type_field() {
        let tx = Transaction::new(AccountId::new(), TransactionType::Withdrawal, 12.5);
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "withdrawal");
        assert_eq!(json["amount"], 12.5);
        assert_eq!(json["account_id"], tx.account_id.to_string());
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn amount_validation() {
        assert!(validate_amount(0.01).is_ok());
        assert!(validate_amount(0.0).is_err());
        assert!(validate_amount(-5.0).is_err());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }
}

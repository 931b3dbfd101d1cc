//! Domain error model.

use thiserror::Error;

/// Result type used across the ledger layers.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Domain-level error.
///
/// Every variant is a business outcome returned to the immediate caller; none
/// of them is fatal to the process and none is retried internally. Each carries
/// a stable machine-readable [`code`](LedgerError::code) and a human-readable
/// message (its `Display`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// No account exists with the requested id.
    #[error("account not found")]
    AccountNotFound,

    /// A withdrawal asked for more than the account holds.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// A transaction type string matched neither `deposit` nor `withdrawal`.
    ///
    /// Catch-all for a validation defect upstream, not a legitimate business
    /// outcome.
    #[error("unknown transaction type: {0}")]
    UnknownTransactionType(String),

    /// An amount or initial balance was not a usable number.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// An account id could not be parsed.
    #[error("invalid account id: {0}")]
    InvalidAccountId(String),
}

impl LedgerError {
    pub fn unknown_type(kind: impl Into<String>) -> Self {
        Self::UnknownTransactionType(kind.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn invalid_account_id(msg: impl Into<String>) -> Self {
        Self::InvalidAccountId(msg.into())
    }

    /// Stable code used in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AccountNotFound => "ACCOUNT_NOT_FOUND",
            Self::InsufficientBalance => "INSUFFICIENT_BALANCE",
            Self::UnknownTransactionType(_) => "UNKNOWN",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InvalidAccountId(_) => "INVALID_ACCOUNT_ID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(LedgerError::AccountNotFound.code(), "ACCOUNT_NOT_FOUND");
        assert_eq!(LedgerError::InsufficientBalance.code(), "INSUFFICIENT_BALANCE");
        assert_eq!(LedgerError::unknown_type("refund").code(), "UNKNOWN");
        assert_eq!(LedgerError::invalid_amount("-1").code(), "INVALID_AMOUNT");
        assert_eq!(LedgerError::invalid_account_id("x").code(), "INVALID_ACCOUNT_ID");
    }

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(LedgerError::AccountNotFound.to_string(), "account not found");
        assert_eq!(LedgerError::InsufficientBalance.to_string(), "insufficient balance");
        assert_eq!(
            LedgerError::unknown_type("refund").to_string(),
            "unknown transaction type: refund"
        );
    }
}

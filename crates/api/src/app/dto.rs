use serde::{Deserialize, Serialize};

use bank_core::AccountId;
use bank_ledger::TransactionType;

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// Fields are optional so a missing field gets a precise message instead of a
/// generic decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateAccountRequest {
    pub owner: Option<String>,
    pub initial_balance: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TransferRequest {
    pub from_account_id: Option<String>,
    pub to_account_id: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub owner: String,
    pub initial_balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewTransfer {
    pub from: AccountId,
    pub to: AccountId,
    pub amount: f64,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// -------------------------
// Validation
// -------------------------

type Validated<T> = Result<T, axum::response::Response>;

fn required<T>(field: &str, kind: &str, value: Option<T>) -> Validated<T> {
    value.ok_or_else(|| errors::invalid_body(format!("{field} is required and must be a {kind}")))
}

fn required_text(field: &str, value: Option<String>) -> Validated<String> {
    let value = required(field, "string", value)?;
    if value.trim().is_empty() {
        return Err(errors::invalid_body(format!("{field} is required and must be a string")));
    }
    Ok(value)
}

fn positive_amount(value: Option<f64>) -> Validated<f64> {
    let amount = required("amount", "number", value)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(errors::invalid_body("amount must be greater than zero"));
    }
    Ok(amount)
}

impl CreateAccountRequest {
    pub fn validate(self) -> Validated<NewAccount> {
        Ok(NewAccount {
            owner: required_text("owner", self.owner)?,
            initial_balance: required("initial_balance", "number", self.initial_balance)?,
        })
    }
}

impl CreateTransactionRequest {
    pub fn validate(self) -> Validated<NewTransaction> {
        let kind = required_text("type", self.kind)?;
        let kind = kind
            .parse::<TransactionType>()
            .map_err(|_| errors::invalid_body("type must be one of: deposit, withdrawal"))?;
        Ok(NewTransaction {
            kind,
            amount: positive_amount(self.amount)?,
        })
    }
}

impl TransferRequest {
    pub fn validate(self) -> Validated<NewTransfer> {
        let from = required_text("from_account_id", self.from_account_id)?;
        let to = required_text("to_account_id", self.to_account_id)?;
        let amount = positive_amount(self.amount)?;
        Ok(NewTransfer {
            from: parse_account_id(&from)?,
            to: parse_account_id(&to)?,
            amount,
        })
    }
}

/// Account ids in paths and bodies must be UUIDs.
pub fn parse_account_id(raw: &str) -> Validated<AccountId> {
    raw.parse::<AccountId>()
        .map_err(errors::ledger_error_to_response)
}

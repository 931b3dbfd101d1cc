use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use bank_core::LedgerError;

pub const INVALID_BODY: &str = "INVALID_BODY";

/// Every ledger error is a client error: 400 with its stable code.
pub fn ledger_error_to_response(err: LedgerError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, err.code(), err.to_string())
}

pub fn invalid_body(message: impl Into<String>) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, INVALID_BODY, message)
}

pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    invalid_body(format!("failed to decode request body: {}", rejection.body_text()))
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    let message = message.into();
    tracing::debug!(code, %message, "responding with error");
    (
        status,
        axum::Json(json!({
            "code": code,
            "message": message,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_errors_map_to_bad_request() {
        for err in [
            LedgerError::AccountNotFound,
            LedgerError::InsufficientBalance,
            LedgerError::unknown_type("refund"),
        ] {
            assert_eq!(ledger_error_to_response(err).status(), StatusCode::BAD_REQUEST);
        }
    }
}

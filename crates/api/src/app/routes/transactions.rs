use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route(
        "/accounts/:id/transactions",
        get(list_transactions).post(create_transaction),
    )
}

/// Deposit into or withdraw from one account.
pub async fn create_transaction(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::CreateTransactionRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match dto::parse_account_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let new_tx = match body.validate() {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services
        .transactions
        .create_transaction(id, new_tx.kind, new_tx.amount)
    {
        Ok(tx) => (StatusCode::CREATED, Json(tx)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn list_transactions(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_account_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.transactions.transactions_for_account(id) {
        Ok(txs) => (StatusCode::OK, Json(txs)).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

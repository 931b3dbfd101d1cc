use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/transfer", post(transfer))
}

/// Withdrawal from the source followed by a deposit into the destination.
pub async fn transfer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::TransferRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let req = match body.validate() {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.transactions.transfer(req.from, req.to, req.amount) {
        Ok(_) => (
            StatusCode::CREATED,
            Json(dto::MessageResponse::new("money transferred successfully")),
        )
            .into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

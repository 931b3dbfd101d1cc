use axum::{http::StatusCode, Json};

use crate::app::dto::MessageResponse;

pub async fn health() -> (StatusCode, Json<MessageResponse>) {
    tracing::debug!("health check endpoint called");
    (StatusCode::OK, Json(MessageResponse::new("OK")))
}

//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: ledger store + orchestrators shared by every handler
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request/response DTOs and body validation
//! - `errors.rs`: consistent `{code, message}` error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the ledger API router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(middleware::request_logging))
            .layer(Extension(services)),
    )
}

/// Build the router served on the separate health-check port.
pub fn build_health_app() -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .layer(axum::middleware::from_fn(middleware::request_logging))
}

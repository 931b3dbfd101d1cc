use axum::Router;

pub mod accounts;
pub mod system;
pub mod transactions;
pub mod transfers;

/// Router for all ledger endpoints.
pub fn router() -> Router {
    Router::new()
        .merge(accounts::router())
        .merge(transactions::router())
        .merge(transfers::router())
}

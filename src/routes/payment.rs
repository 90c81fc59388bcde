use axum::routing::{get, post};
use axum::Router;

use super::not_implemented;

/// Checkout and gateway-webhook endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/checkout", post(not_implemented))
        .route("/webhook", post(not_implemented))
        .route("/history", get(not_implemented))
}

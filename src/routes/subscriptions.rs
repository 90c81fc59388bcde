use axum::routing::{get, post};
use axum::Router;

use super::not_implemented;

pub fn router() -> Router {
    Router::new()
        .route("/plans", get(not_implemented))
        .route("/", post(not_implemented))
        .route("/me", get(not_implemented))
}

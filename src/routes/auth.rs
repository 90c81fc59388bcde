use axum::routing::{get, post};
use axum::Router;

use super::not_implemented;

/// Registration, login and current-session endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/register", post(not_implemented))
        .route("/login", post(not_implemented))
        .route("/logout", post(not_implemented))
        .route("/me", get(not_implemented))
}

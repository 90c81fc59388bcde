use axum::routing::{get, post};
use axum::Router;

use super::not_implemented;

pub fn router() -> Router {
    Router::new()
        .route("/saved", get(not_implemented).post(not_implemented))
        .route("/inquiries", get(not_implemented))
        .route("/inquiries/:property_id", post(not_implemented))
}

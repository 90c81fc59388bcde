use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde_json::json;

pub mod admin;
pub mod auth;
pub mod buyers;
pub mod payment;
pub mod properties;
pub mod subscriptions;

/// Shared placeholder handler. The route tables below define the API surface;
/// the domain logic behind them is ported group by group.
pub(crate) async fn not_implemented() -> impl IntoResponse {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({ "message": "This endpoint is not implemented yet" })),
    )
}

use axum::routing::{get, put};
use axum::Router;

use super::not_implemented;

/// Back-office endpoints: platform stats, user management, listing approval.
pub fn router() -> Router {
    Router::new()
        .route("/stats", get(not_implemented))
        .route("/users", get(not_implemented))
        .route("/properties/:id/approve", put(not_implemented))
}

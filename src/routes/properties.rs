use axum::routing::get;
use axum::Router;

use super::not_implemented;

/// Property listing CRUD.
pub fn router() -> Router {
    Router::new()
        .route("/", get(not_implemented).post(not_implemented))
        .route(
            "/:id",
            get(not_implemented)
                .put(not_implemented)
                .delete(not_implemented),
        )
}

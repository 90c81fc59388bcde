use crate::config::AppConfig;
use crate::cors::OriginPolicy;
use crate::error::Result;
use crate::routes;
use axum::body::{Bytes, Full};
use axum::http::{header, Response, StatusCode, Uri};
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::{Extension, Router};
use hyper::Server;
use mongodb::Database;
use serde::Serialize;
use serde_json::json;
use std::any::Any;
use std::fs;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tracing::{error, info};

/// Shared handles for request handlers, attached as an `Extension`.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: AppConfig,
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    database: String,
}

/// Health check endpoint
async fn health(Extension(state): Extension<AppState>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "healthy",
        service: "propertyhub-api",
        version: env!("CARGO_PKG_VERSION"),
        database: state.db.name().to_string(),
    })
}

/// Fallback for unmatched routes.
async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("Not found - {}", uri.path()) })),
    )
}

/// Last-chance error middleware: a panicking handler still gets a well-formed
/// JSON response instead of a dropped connection.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Full<Bytes>> {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("handler panicked: {detail}");

    let body = json!({ "message": "Internal server error" }).to_string();
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::from(body))
        .unwrap()
}

/// Assemble the full application router: health check, the six API route
/// groups, static uploads, JSON not-found fallback, panic recovery and CORS.
pub fn create_app(state: AppState) -> Router {
    let policy = OriginPolicy::new(state.config.frontend_url.as_deref());
    info!("CORS policy: {policy:?}");

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", routes::auth::router())
        .nest("/api/properties", routes::properties::router())
        .nest("/api/subscriptions", routes::subscriptions::router())
        .nest("/api/admin", routes::admin::router())
        .nest("/api/buyers", routes::buyers::router())
        .nest("/api/payment", routes::payment::router())
        .nest_service("/uploads", ServeDir::new(&state.config.uploads_dir))
        .fallback(not_found)
        .layer(Extension(state))
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(policy.into_layer()),
        )
}

/// Start the HTTP server on the configured port.
pub async fn start_server(state: AppState) -> Result<()> {
    let port = state.config.port;

    // ServeDir answers 404 for a missing root, but the directory should exist
    // so uploads written by handlers have somewhere to land
    fs::create_dir_all(&state.config.uploads_dir)?;

    let app = create_app(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("HTTP server running on http://localhost:{port}");
    info!("Health check: http://localhost:{port}/health");

    Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

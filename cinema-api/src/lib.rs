use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub mod bookings;
pub mod error;
pub mod movies;
pub mod report;
pub mod response;
pub mod service;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .merge(movies::routes())
        .merge(bookings::routes())
        .merge(report::routes())
        .route("/api/test", get(health))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "success": true,
        "message": "server is up",
        "timestamp": chrono::Utc::now(),
    }))
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": "route not found",
            "path": uri.path(),
        })),
    )
}

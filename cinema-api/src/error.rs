use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use cinema_domain::error::ServiceError;

#[derive(Debug)]
pub enum AppError {
    Validation(Vec<String>),
    NotFound(&'static str),
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => AppError::Validation(errors),
            ServiceError::NotFound(entity) => AppError::NotFound(entity),
            ServiceError::Store(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                let body = Json(json!({
                    "success": false,
                    "error": "validation failed",
                    "errors": errors,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::NotFound(entity) => {
                let body = Json(json!({
                    "success": false,
                    "error": format!("{entity} not found"),
                }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            AppError::Internal(msg) => {
                // Storage-layer details stay in the logs, never in the body.
                tracing::error!("internal error: {}", msg);
                let body = Json(json!({
                    "success": false,
                    "error": "internal storage error",
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

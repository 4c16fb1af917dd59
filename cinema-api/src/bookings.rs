use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};

use cinema_domain::models::CreateBookingRequest;

use crate::error::AppError;
use crate::response;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route("/api/bookings/{id}", get(get_booking).delete(cancel_booking))
}

/// Total parse of an id path segment. Non-numeric input fails closed as
/// not-found rather than coercing to a sentinel value.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::NotFound("booking"))
}

async fn list_bookings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bookings = state.service.list_bookings().await?;
    Ok(response::success_list(bookings))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.service.create_booking(&req).await?;
    Ok((
        StatusCode::CREATED,
        response::success_message(booking, "booking created"),
    ))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.service.get_booking(parse_id(&id)?).await?;
    Ok(response::success(booking))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let removed = state.service.cancel_booking(parse_id(&id)?).await?;
    Ok(response::success_message(removed, "booking cancelled"))
}

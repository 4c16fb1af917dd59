use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde_json::json;

use cinema_domain::models::MovieSearchFilters;

use crate::error::AppError;
use crate::response;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/movies", get(list_movies))
        .route("/api/movies/search", post(search_movies))
}

async fn list_movies(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let movies = state.service.list_movies().await?;
    Ok(response::success_list(movies))
}

async fn search_movies(
    State(state): State<AppState>,
    Json(filters): Json<MovieSearchFilters>,
) -> Result<impl IntoResponse, AppError> {
    let movies = state.service.search_movies(&filters).await?;
    let count = movies.len();
    // Echoes the applied filters back alongside the hits.
    Ok(axum::Json(json!({
        "success": true,
        "data": movies,
        "filters": filters,
        "count": count,
    })))
}

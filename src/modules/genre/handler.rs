use super::dto::GenreResponse;
use super::service::GenreService;
use crate::common::response::{ApiSuccess, ErrorBody};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

/// List all upstream movie genres
#[utoipa::path(
    get,
    path = "/genres",
    responses(
        (status = 200, description = "List of genres", body = Vec<GenreResponse>),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    ),
    tag = "Genres"
)]
pub async fn list_genres(State(state): State<AppState>) -> impl IntoResponse {
    match GenreService::find_all(state).await {
        Ok(genres) => ApiSuccess(genres, StatusCode::OK).into_response(),
        Err(e) => e.into_api_error("Failed to fetch genres").into_response(),
    }
}

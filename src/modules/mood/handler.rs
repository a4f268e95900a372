use super::dto::MoodQuery;
use super::service::MoodService;
use crate::common::extract::ApiQuery;
use crate::common::response::{ApiSuccess, ErrorBody};
use crate::modules::movie::dto::MovieSummary;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

/// Popular movies matching a mood
#[utoipa::path(
    get,
    path = "/mood",
    params(MoodQuery),
    responses(
        (status = 200, description = "Movies for the mood", body = Vec<MovieSummary>),
        (status = 400, description = "Invalid mood type", body = ErrorBody),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    ),
    tag = "Movies"
)]
pub async fn by_mood(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MoodQuery>,
) -> impl IntoResponse {
    match MoodService::recommend(state, query.mood).await {
        Ok(movies) => ApiSuccess(movies, StatusCode::OK).into_response(),
        Err(e) => e.into_api_error("Failed to fetch mood-based movies.").into_response(),
    }
}

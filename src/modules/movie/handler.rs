use super::dto::{ByGenreQuery, MovieDetail, MovieSummary, SearchQuery, SuggestQuery, Suggestion};
use super::service::MovieService;
use crate::common::extract::ApiQuery;
use crate::common::response::{ApiSuccess, ErrorBody};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// Trending movies this week
#[utoipa::path(
    get,
    path = "/trending",
    responses(
        (status = 200, description = "Trending movies", body = Vec<MovieSummary>),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    ),
    tag = "Movies"
)]
pub async fn trending(State(state): State<AppState>) -> impl IntoResponse {
    match MovieService::trending(state).await {
        Ok(movies) => ApiSuccess(movies, StatusCode::OK).into_response(),
        Err(e) => e.into_api_error("Failed to fetch trending movies.").into_response(),
    }
}

/// Top rated movies
#[utoipa::path(
    get,
    path = "/top-rated",
    responses(
        (status = 200, description = "Top rated movies", body = Vec<MovieSummary>),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    ),
    tag = "Movies"
)]
pub async fn top_rated(State(state): State<AppState>) -> impl IntoResponse {
    match MovieService::top_rated(state).await {
        Ok(movies) => ApiSuccess(movies, StatusCode::OK).into_response(),
        Err(e) => e.into_api_error("Failed to fetch top-rated movies.").into_response(),
    }
}

/// Upcoming releases
#[utoipa::path(
    get,
    path = "/upcoming",
    responses(
        (status = 200, description = "Upcoming movies", body = Vec<MovieSummary>),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    ),
    tag = "Movies"
)]
pub async fn upcoming(State(state): State<AppState>) -> impl IntoResponse {
    match MovieService::upcoming(state).await {
        Ok(movies) => ApiSuccess(movies, StatusCode::OK).into_response(),
        Err(e) => e.into_api_error("Failed to fetch upcoming movies.").into_response(),
    }
}

/// Search by title, or discover by genre, year and language
#[utoipa::path(
    get,
    path = "/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching movies", body = Vec<MovieSummary>),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    ),
    tag = "Movies"
)]
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> impl IntoResponse {
    match MovieService::search(state, query).await {
        Ok(movies) => ApiSuccess(movies, StatusCode::OK).into_response(),
        Err(e) => e.into_api_error("Failed to search movies.").into_response(),
    }
}

/// Popular movies in one genre
#[utoipa::path(
    get,
    path = "/by-genre",
    params(ByGenreQuery),
    responses(
        (status = 200, description = "Movies in genre", body = Vec<MovieSummary>),
        (status = 400, description = "Missing genre ID", body = ErrorBody),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    ),
    tag = "Movies"
)]
pub async fn by_genre(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ByGenreQuery>,
) -> impl IntoResponse {
    match MovieService::by_genre(state, query.id).await {
        Ok(movies) => ApiSuccess(movies, StatusCode::OK).into_response(),
        Err(e) => e.into_api_error("Failed to fetch movies by genre").into_response(),
    }
}

/// Title autocomplete
#[utoipa::path(
    get,
    path = "/suggest",
    params(SuggestQuery),
    responses(
        (status = 200, description = "Suggestions, empty for a blank query", body = Vec<Suggestion>),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    ),
    tag = "Movies"
)]
pub async fn suggest(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SuggestQuery>,
) -> impl IntoResponse {
    match MovieService::suggest(state, query.query).await {
        Ok(suggestions) => ApiSuccess(suggestions, StatusCode::OK).into_response(),
        Err(e) => e.into_api_error("Failed to fetch suggestions.").into_response(),
    }
}

/// Full movie detail with credits, backdrops and age rating
#[utoipa::path(
    get,
    path = "/movie/{id}",
    params(
        ("id" = u64, Path, description = "TMDb movie ID")
    ),
    responses(
        (status = 200, description = "Movie detail", body = MovieDetail),
        (status = 400, description = "Invalid movie ID", body = ErrorBody),
        (status = 500, description = "Upstream failure", body = ErrorBody)
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match MovieService::detail(state, &id).await {
        Ok(detail) => ApiSuccess(detail, StatusCode::OK).into_response(),
        Err(e) => e.into_api_error("Failed to load movie details.").into_response(),
    }
}

use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod service;

pub fn router() -> axum::Router<AppState> {
    Router::new()
        .route("/trending", get(handler::trending))
        .route("/top-rated", get(handler::top_rated))
        .route("/upcoming", get(handler::upcoming))
        .route("/search", get(handler::search))
        .route("/by-genre", get(handler::by_genre))
        .route("/suggest", get(handler::suggest))
        .route("/movie/{id}", get(handler::get_movie))
}

use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod service;

pub fn router() -> axum::Router<AppState> {
    Router::new().route("/genres", get(handler::list_genres))
}

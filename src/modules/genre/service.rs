use super::dto::GenreResponse;
use crate::common::error::AppError;
use crate::infrastructure::tmdb::fetch_as;
use crate::infrastructure::tmdb::models::{Genre, GenreList};
use crate::state::AppState;

pub struct GenreService;

impl GenreService {
    /// Raw upstream genre catalogue, in upstream order.
    pub(crate) async fn catalogue(state: &AppState) -> Result<Vec<Genre>, AppError> {
        let list: GenreList = fetch_as(state.upstream.as_ref(), "/genre/movie/list", &[]).await?;
        Ok(list.genres)
    }

    pub async fn find_all(state: AppState) -> Result<Vec<GenreResponse>, AppError> {
        let genres = Self::catalogue(&state).await?;

        Ok(genres.into_iter().map(GenreResponse::from).collect())
    }
}

use super::model::Mood;
use crate::common::error::AppError;
use crate::modules::genre::service::GenreService;
use crate::modules::movie::dto::MovieSummary;
use crate::modules::movie::service::MovieService;
use crate::state::AppState;
use tracing::debug;

pub struct MoodService;

impl MoodService {
    /// Upstream ids of the genres a mood stands for, in upstream order.
    pub async fn resolve_genres(state: &AppState, mood: Mood) -> Result<Vec<i64>, AppError> {
        let wanted = mood.genre_names();
        let ids = GenreService::catalogue(state)
            .await?
            .into_iter()
            .filter(|genre| wanted.contains(&genre.name.as_str()))
            .map(|genre| genre.id)
            .collect();

        Ok(ids)
    }

    /// Popular movies in the mood's genres. When none of the mood's genre
    /// names exist upstream the result is empty rather than an unfiltered
    /// discovery.
    pub async fn recommend(state: AppState, raw: Option<String>) -> Result<Vec<MovieSummary>, AppError> {
        let mood = raw
            .as_deref()
            .unwrap_or_default()
            .parse::<Mood>()
            .map_err(|_| AppError::invalid("Invalid mood type."))?;

        let ids = Self::resolve_genres(&state, mood).await?;
        debug!(%mood, ?ids, "mood resolved");
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let with_genres = ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let params = [
            ("with_genres", with_genres),
            ("sort_by", "popularity.desc".to_string()),
            ("page", "1".to_string()),
        ];
        MovieService::list(&state, "/discover/movie", &params).await
    }
}

use super::dto::{non_empty, summaries, MovieDetail, MovieSummary, SearchQuery, Suggestion};
use crate::common::error::AppError;
use crate::infrastructure::tmdb::models::{
    Credits, Images, MovieDetails, MovieRecord, Paginated, ReleaseDates,
};
use crate::infrastructure::tmdb::{fetch_as, Params};
use crate::state::AppState;
use tracing::debug;

pub struct MovieService;

impl MovieService {
    /// One upstream list call mapped to summaries.
    pub(crate) async fn list(
        state: &AppState,
        path: &str,
        params: &Params<'_>,
    ) -> Result<Vec<MovieSummary>, AppError> {
        let page: Paginated<MovieRecord> = fetch_as(state.upstream.as_ref(), path, params).await?;
        Ok(summaries(page.results, &state.images))
    }

    fn first_page(state: &AppState) -> [(&'static str, String); 2] {
        [
            ("language", state.config.language.clone()),
            ("page", "1".to_string()),
        ]
    }

    pub async fn trending(state: AppState) -> Result<Vec<MovieSummary>, AppError> {
        Self::list(&state, "/trending/movie/week", &[]).await
    }

    pub async fn top_rated(state: AppState) -> Result<Vec<MovieSummary>, AppError> {
        Self::list(&state, "/movie/top_rated", &Self::first_page(&state)).await
    }

    pub async fn upcoming(state: AppState) -> Result<Vec<MovieSummary>, AppError> {
        Self::list(&state, "/movie/upcoming", &Self::first_page(&state)).await
    }

    /// Title search when `name` is given, filtered discovery otherwise.
    pub async fn search(state: AppState, query: SearchQuery) -> Result<Vec<MovieSummary>, AppError> {
        let name = non_empty(query.name.as_deref());
        let path = if name.is_some() { "/search/movie" } else { "/discover/movie" };

        let mut params = vec![
            ("include_adult", "false".to_string()),
            ("sort_by", "popularity.desc".to_string()),
        ];
        let optional = [
            ("query", name),
            ("with_genres", non_empty(query.genre.as_deref())),
            ("primary_release_year", non_empty(query.year.as_deref())),
            ("with_original_language", non_empty(query.language.as_deref())),
        ];
        params.extend(
            optional
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v))),
        );

        Self::list(&state, path, &params).await
    }

    pub async fn by_genre(state: AppState, id: Option<String>) -> Result<Vec<MovieSummary>, AppError> {
        let id = non_empty(id.as_deref()).ok_or_else(|| AppError::invalid("Missing genre ID"))?;

        let params = [
            ("with_genres", id),
            ("sort_by", "popularity.desc".to_string()),
        ];
        Self::list(&state, "/discover/movie", &params).await
    }

    /// Autocomplete. A blank query short-circuits to no suggestions.
    pub async fn suggest(state: AppState, query: Option<String>) -> Result<Vec<Suggestion>, AppError> {
        let Some(query) = non_empty(query.as_deref()) else {
            return Ok(Vec::new());
        };

        let params = [
            ("query", query),
            ("language", state.config.language.clone()),
            ("page", "1".to_string()),
        ];
        let page: Paginated<MovieRecord> =
            fetch_as(state.upstream.as_ref(), "/search/movie", &params).await?;

        Ok(page.results.into_iter().map(Suggestion::from).collect())
    }

    /// Joins details, credits, images and release dates for one movie.
    ///
    /// The four calls run concurrently; the first failure aborts the rest and
    /// no partial detail is produced.
    pub async fn detail(state: AppState, raw_id: &str) -> Result<MovieDetail, AppError> {
        let id = parse_movie_id(raw_id)?;
        let upstream = state.upstream.as_ref();

        let language = [("language", state.config.language.clone())];
        let none: [(&str, String); 0] = [];
        let details_path = format!("/movie/{id}");
        let credits_path = format!("/movie/{id}/credits");
        let images_path = format!("/movie/{id}/images");
        let releases_path = format!("/movie/{id}/release_dates");

        let (details, credits, images, releases) = tokio::try_join!(
            fetch_as::<MovieDetails>(upstream, &details_path, &language),
            fetch_as::<Credits>(upstream, &credits_path, &none),
            fetch_as::<Images>(upstream, &images_path, &none),
            fetch_as::<ReleaseDates>(upstream, &releases_path, &none),
        )?;

        debug!(movie_id = id, cast = credits.cast.len(), backdrops = images.backdrops.len(), "movie detail joined");

        Ok(MovieDetail::assemble(
            details,
            credits,
            images,
            &releases,
            &state.images,
            &state.config.certification_regions,
        ))
    }
}

fn parse_movie_id(raw: &str) -> Result<u64, AppError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::invalid("Invalid movie ID"))
}

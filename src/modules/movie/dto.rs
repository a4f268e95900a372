use serde::{Deserialize, Serialize, Serializer};
use utoipa::{IntoParams, ToSchema};

use crate::infrastructure::tmdb::models::{Credits, Images, MovieDetails, MovieRecord, ReleaseDates};
use crate::infrastructure::tmdb::ImageCdn;

pub const UNKNOWN_YEAR: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const CAST_LIMIT: usize = 10;
pub const CREW_LIMIT: usize = 10;

// --- QUERY DTOs ---

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Title text. When absent the search becomes a discovery query.
    pub name: Option<String>,
    /// Upstream genre id(s), comma separated.
    pub genre: Option<String>,
    /// Primary release year.
    pub year: Option<String>,
    /// Original language code, e.g. `en`.
    pub language: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ByGenreQuery {
    /// Upstream genre id.
    pub id: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SuggestQuery {
    /// Partial title typed by the user.
    pub query: Option<String>,
}

/// Trims a query value and treats blanks as missing.
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

// --- RESPONSE DTOs ---

/// Average vote, or `"N/A"` for unrated titles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Score(f64),
    Unrated,
}

impl Rating {
    pub fn from_vote(vote: Option<f64>) -> Self {
        match vote {
            Some(score) if score.is_finite() && score != 0.0 => Rating::Score(score),
            _ => Rating::Unrated,
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Rating::Score(score) => serializer.serialize_f64(*score),
            Rating::Unrated => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// Text before the first `-` of a `YYYY-MM-DD` date.
pub fn release_year(date: Option<&str>) -> Option<&str> {
    date.and_then(|d| d.split('-').next())
        .map(str::trim)
        .filter(|year| !year.is_empty())
}

fn text_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    /// Four digit year or `"Unknown"`.
    pub year: String,
    /// Empty when the movie has no poster.
    pub poster: String,
    pub description: String,
    #[schema(value_type = Object)]
    pub rating: Rating,
}

impl MovieSummary {
    pub fn from_record(record: MovieRecord, images: &ImageCdn) -> Self {
        Self {
            id: record.id,
            title: record.title.unwrap_or_default(),
            year: release_year(record.release_date.as_deref())
                .unwrap_or(UNKNOWN_YEAR)
                .to_string(),
            poster: images.poster(record.poster_path.as_deref()),
            description: text_or(record.overview, NO_DESCRIPTION),
            rating: Rating::from_vote(record.vote_average),
        }
    }
}

pub fn summaries(records: Vec<MovieRecord>, images: &ImageCdn) -> Vec<MovieSummary> {
    records
        .into_iter()
        .map(|record| MovieSummary::from_record(record, images))
        .collect()
}

/// Autocomplete entry.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Suggestion {
    pub id: i64,
    pub title: String,
    /// Four digit year or `"N/A"`.
    pub year: String,
}

impl From<MovieRecord> for Suggestion {
    fn from(record: MovieRecord) -> Self {
        Self {
            id: record.id,
            title: record.title.unwrap_or_default(),
            year: release_year(record.release_date.as_deref())
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CastMember {
    pub name: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CrewMember {
    pub name: String,
    pub job: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    pub year: String,
    pub poster: String,
    #[schema(value_type = Object)]
    pub rating: Rating,
    /// Minutes.
    pub runtime: Option<i64>,
    pub genres: Vec<String>,
    /// Original language code.
    pub language: Option<String>,
    pub description: String,
    pub age_rating: String,
    /// Backdrop URLs.
    pub images: Vec<String>,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

impl MovieDetail {
    pub fn assemble(
        details: MovieDetails,
        credits: Credits,
        backdrops: Images,
        releases: &ReleaseDates,
        images: &ImageCdn,
        regions: &[String],
    ) -> Self {
        let cast = credits
            .cast
            .into_iter()
            .take(CAST_LIMIT)
            .map(|actor| CastMember {
                image: images.profile(actor.profile_path.as_deref()),
                name: actor.name,
            })
            .collect();

        let crew = credits
            .crew
            .into_iter()
            .take(CREW_LIMIT)
            .map(|member| CrewMember {
                image: images.profile(member.profile_path.as_deref()),
                job: member.job.unwrap_or_default(),
                name: member.name,
            })
            .collect();

        Self {
            id: details.id,
            title: details.title.unwrap_or_default(),
            year: release_year(details.release_date.as_deref())
                .unwrap_or(UNKNOWN_YEAR)
                .to_string(),
            poster: images.poster(details.poster_path.as_deref()),
            rating: Rating::from_vote(details.vote_average),
            runtime: details.runtime,
            genres: details.genres.into_iter().map(|g| g.name).collect(),
            language: details.original_language,
            description: text_or(details.overview, NO_DESCRIPTION),
            age_rating: age_rating(releases, regions),
            images: backdrops
                .backdrops
                .iter()
                .map(|b| images.backdrop(&b.file_path))
                .collect(),
            cast,
            crew,
        }
    }
}

/// First certification of the first preferred region that TMDb lists.
///
/// A listed region with no usable entry yields `"N/A"`; later regions are
/// only consulted when earlier ones are missing entirely.
pub fn age_rating(releases: &ReleaseDates, regions: &[String]) -> String {
    regions
        .iter()
        .find_map(|region| {
            releases
                .results
                .iter()
                .find(|r| r.iso_3166_1.eq_ignore_ascii_case(region))
        })
        .and_then(|region| region.release_dates.first())
        .and_then(|entry| entry.certification.as_deref())
        .map(str::trim)
        .filter(|cert| !cert.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

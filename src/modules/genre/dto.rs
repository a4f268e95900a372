use serde::Serialize;
use utoipa::ToSchema;

use crate::infrastructure::tmdb::models::Genre;

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreResponse {
    pub id: i64,
    pub name: String,
}

impl From<Genre> for GenreResponse {
    fn from(g: Genre) -> Self {
        Self {
            id: g.id,
            name: g.name,
        }
    }
}

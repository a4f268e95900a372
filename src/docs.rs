use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::movie::handler::trending,
        crate::modules::movie::handler::top_rated,
        crate::modules::movie::handler::upcoming,
        crate::modules::movie::handler::search,
        crate::modules::movie::handler::by_genre,
        crate::modules::movie::handler::suggest,
        crate::modules::movie::handler::get_movie,
        crate::modules::genre::handler::list_genres,
        crate::modules::mood::handler::by_mood,
    ),
    components(
        schemas(
            crate::common::response::ErrorBody,
            crate::modules::movie::dto::MovieSummary,
            crate::modules::movie::dto::MovieDetail,
            crate::modules::movie::dto::CastMember,
            crate::modules::movie::dto::CrewMember,
            crate::modules::movie::dto::Suggestion,
            crate::modules::genre::dto::GenreResponse,
        )
    ),
    tags(
        (name = "Movies", description = "Movie lists, search and detail proxied from TMDb"),
        (name = "Genres", description = "Upstream genre catalogue")
    )
)]
pub struct ApiDoc;

//! OpenAPI document for the HTTP surface, served at `/api-docs/openapi.json`
//! and browsable under `/swagger-ui`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "movie-lookup API",
        description = "Looks up amazon.de video products by ASIN and returns structured movie data"
    ),
    paths(crate::movies::handlers::get_movie, crate::health::health_check),
    components(schemas(
        crate::extractor::MovieRecord,
        crate::movies::dtos::ErrorResponse,
        crate::health::HealthResponse
    )),
    tags(
        (name = "movies", description = "Movie lookup"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{app_state::AppState, extractor::MovieRecord, movies::error::LookupError};

#[utoipa::path(
    get,
    path = "/movie/amazon/{amazon_id}",
    tag = "movies",
    params(("amazon_id" = String, Path, description = "Amazon product identifier (ASIN), case-insensitive")),
    responses(
        (status = 200, description = "Movie extracted from the product page", body = MovieRecord),
        (status = 400, description = "Malformed identifier", body = crate::movies::dtos::ErrorResponse),
        (status = 404, description = "Product not available upstream", body = crate::movies::dtos::ErrorResponse),
        (status = 500, description = "Page could not be parsed or a field is missing", body = crate::movies::dtos::ErrorResponse),
        (status = 502, description = "Upstream could not be reached", body = crate::movies::dtos::ErrorResponse)
    )
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(amazon_id): Path<String>,
) -> Result<Json<MovieRecord>, LookupError> {
    let movie = state.movies.lookup(&amazon_id).await?;
    Ok(Json(movie))
}

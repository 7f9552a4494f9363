use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MovieRecord {
    pub title: String,
    /// Absolute URL of the cover image.
    pub poster: String,
    pub release_year: i32,
    /// Cast names in page order, exactly as split from the listing.
    pub actors: Vec<String>,
    /// ASINs of the related titles shown on the page.
    pub similar_ids: Vec<String>,
}

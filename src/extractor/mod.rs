pub mod error;
pub mod layout;
pub mod matcher;
pub mod model;

#[cfg(test)]
mod tests;

pub use error::ExtractError;
pub use matcher::Matcher;
pub use model::MovieRecord;

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::extractor::matcher::{attr, find, find_all, join_text, text};

pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Parses `html` and extracts the movie in one synchronous step, so the
/// non-`Send` document never outlives the call.
pub fn extract_from_html(html: &str) -> Result<MovieRecord, ExtractError> {
    extract(&parse_document(html))
}

pub fn extract(document: &Html) -> Result<MovieRecord, ExtractError> {
    // 1. Title: text of the first child of the title block
    let title = extract_title(document)?;

    // 2. Release year
    let release_year = extract_release_year(document)?;

    // 3. Cast list
    let actors = extract_actors(document)?;

    // 4. Poster image
    let poster = extract_poster(document)?;

    // 5. Related titles, possibly none
    let similar_ids = extract_similar_ids(document);

    Ok(MovieRecord {
        title,
        poster,
        release_year,
        actors,
        similar_ids,
    })
}

fn require<'a>(
    document: &'a Html,
    matcher: &Matcher,
    field: &'static str,
) -> Result<ElementRef<'a>, ExtractError> {
    find(document, matcher).ok_or_else(|| {
        debug!(field, "no node matched");
        ExtractError::FieldNotFound(field)
    })
}

fn extract_title(document: &Html) -> Result<String, ExtractError> {
    let node = require(document, &layout::title(), "title")?;

    let title = node
        .first_child()
        .map(|child| {
            join_text(
                child
                    .descendants()
                    .filter_map(|n| n.value().as_text())
                    .map(|t| &**t),
            )
        })
        .unwrap_or_default();

    if title.is_empty() {
        debug!("title block has no leading text");
        return Err(ExtractError::MalformedField("title"));
    }

    Ok(title)
}

fn extract_release_year(document: &Html) -> Result<i32, ExtractError> {
    let node = require(document, &layout::release_year(), "releaseYear")?;
    let raw = text(node);

    raw.parse::<i32>().map_err(|_| {
        debug!(value = %raw, "release year is not numeric");
        ExtractError::MalformedField("releaseYear")
    })
}

fn extract_actors(document: &Html) -> Result<Vec<String>, ExtractError> {
    let node = require(document, &layout::actors(), "actors")?;

    // Names keep surrounding whitespace; "A, B" yields ["A", " B"].
    Ok(text(node).split(',').map(str::to_string).collect())
}

fn extract_poster(document: &Html) -> Result<String, ExtractError> {
    let node = require(document, &layout::poster(), "poster")?;

    attr(node, layout::POSTER_SRC_ATTR)
        .map(str::to_string)
        .ok_or(ExtractError::FieldNotFound("poster"))
}

// One entry per matched node; a node without the attribute yields "".
fn extract_similar_ids(document: &Html) -> Vec<String> {
    find_all(document, &layout::similar_items())
        .into_iter()
        .map(|node| {
            attr(node, layout::SIMILAR_ITEM_ID_ATTR)
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

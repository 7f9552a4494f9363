//! Where each field lives on an amazon.de video product page.

use crate::extractor::matcher::Matcher;

pub const TITLE_ID: &str = "aiv-content-title";
pub const RELEASE_YEAR_CLASS: &str = "release-year";
pub const CAST_LABEL: &str = "Darsteller:";
pub const META_INFO_CLASS: &str = "dv-meta-info size-small";
pub const POSTER_CONTAINER_CLASS: &str = "dp-meta-icon-container";
pub const SIMILAR_ITEM_CLASS: &str = "downloadable_movie";
pub const SIMILAR_ITEM_ID_ATTR: &str = "data-asin";
pub const POSTER_SRC_ATTR: &str = "src";

pub fn title() -> Matcher {
    Matcher::Id(TITLE_ID)
}

pub fn release_year() -> Matcher {
    Matcher::Class(RELEASE_YEAR_CLASS)
}

/// `<dd>` two nodes after the `Darsteller:` term inside the meta info list.
pub fn actors() -> Matcher {
    Matcher::All(vec![
        Matcher::Tag("dd"),
        Matcher::PrecededBy {
            distance: 2,
            text: CAST_LABEL,
        },
        Matcher::parent(Matcher::ClassAttr(META_INFO_CLASS)),
    ])
}

pub fn poster() -> Matcher {
    Matcher::All(vec![
        Matcher::Tag("img"),
        Matcher::parent(Matcher::ClassAttr(POSTER_CONTAINER_CLASS)),
    ])
}

pub fn similar_items() -> Matcher {
    Matcher::Class(SIMILAR_ITEM_CLASS)
}

use std::fs;

use crate::extractor::{ExtractError, MovieRecord, extract, extract_from_html, parse_document};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

/// Minimal page that satisfies every required matcher; `overrides` replace
/// individual blocks by key.
fn page(overrides: &[(&str, &str)]) -> String {
    let block = |key: &str, default: &'static str| -> String {
        overrides
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
            .unwrap_or_else(|| default.to_string())
    };

    format!(
        "<html><body>{}{}{}{}{}</body></html>",
        block(
            "title",
            r#"<h1 id="aiv-content-title">Example Movie</h1>"#
        ),
        block("year", r#"<span class="release-year">2015</span>"#),
        block(
            "actors",
            "<dl class=\"dv-meta-info size-small\"><dt>Darsteller:</dt>\n<dd>Ann,Bob</dd></dl>"
        ),
        block(
            "poster",
            r#"<div class="dp-meta-icon-container"><img src="https://img.example/p.jpg"></div>"#
        ),
        block("similar", ""),
    )
}

#[test]
fn test_extract_product_page() {
    let html = fixture("product.html");
    let movie = extract_from_html(&html).unwrap();

    assert_eq!(
        movie,
        MovieRecord {
            title: "Fack ju Göhte 2".to_string(),
            poster: "https://images-eu.ssl-images-amazon.com/images/I/81pXGo9u3yL._SX200_.jpg"
                .to_string(),
            release_year: 2015,
            actors: vec![
                "Elyas M'Barek".to_string(),
                " Jella Haase".to_string(),
                " Karoline Herfurth".to_string(),
            ],
            similar_ids: vec![
                "B00OY7ZGMG".to_string(),
                "B01BKV4ON2".to_string(),
                "B01M0F9V9N".to_string(),
            ],
        }
    );
}

#[test]
fn test_title_is_first_child_text() {
    let movie = extract_from_html(&page(&[])).unwrap();
    assert_eq!(movie.title, "Example Movie");
}

#[test]
fn test_title_ignores_nested_release_year() {
    let html = page(&[
        (
            "title",
            r#"<h1 id="aiv-content-title">Example Movie <span class="release-year">2015</span></h1>"#,
        ),
        ("year", ""),
    ]);
    let movie = extract_from_html(&html).unwrap();
    assert_eq!(movie.title, "Example Movie");
    assert_eq!(movie.release_year, 2015);
}

#[test]
fn test_empty_title_block_is_malformed() {
    let html = page(&[("title", r#"<h1 id="aiv-content-title"></h1>"#)]);
    assert_eq!(
        extract_from_html(&html),
        Err(ExtractError::MalformedField("title"))
    );
}

#[test]
fn test_title_with_blank_first_child_is_malformed() {
    let html = page(&[(
        "title",
        "<h1 id=\"aiv-content-title\">\n  <span>Example Movie</span></h1>",
    )]);
    assert_eq!(
        extract_from_html(&html),
        Err(ExtractError::MalformedField("title"))
    );
}

#[test]
fn test_similar_ids_follow_document_order() {
    let html = page(&[(
        "similar",
        r#"<div class="downloadable_movie" data-asin="A1"></div>
           <section><div class="downloadable_movie" data-asin="A2"></div></section>
           <div class="downloadable_movie" data-asin="A3"></div>"#,
    )]);
    let movie = extract_from_html(&html).unwrap();
    assert_eq!(movie.similar_ids, vec!["A1", "A2", "A3"]);
}

#[test]
fn test_no_similar_items_is_not_an_error() {
    let movie = extract_from_html(&page(&[])).unwrap();
    assert!(movie.similar_ids.is_empty());
}

#[test]
fn test_similar_item_without_asin_yields_empty_id() {
    let html = page(&[(
        "similar",
        r#"<div class="downloadable_movie"></div><div class="downloadable_movie" data-asin="A9"></div>"#,
    )]);
    let movie = extract_from_html(&html).unwrap();
    assert_eq!(movie.similar_ids, vec!["", "A9"]);
}

#[test]
fn test_similar_items_nested_in_a_match_are_not_collected() {
    let html = page(&[(
        "similar",
        r#"<div class="downloadable_movie"></div><div class="downloadable_movie" data-asin="A1"><span class="downloadable_movie" data-asin="N1"></span></div>"#,
    )]);
    let movie = extract_from_html(&html).unwrap();
    assert_eq!(movie.similar_ids, vec!["", "A1"]);
}

#[test]
fn test_release_year_parses_integer() {
    let movie = extract_from_html(&page(&[])).unwrap();
    assert_eq!(movie.release_year, 2015);
}

#[test]
fn test_release_year_not_numeric_is_malformed() {
    let html = page(&[("year", r#"<span class="release-year">unknown</span>"#)]);
    assert_eq!(
        extract_from_html(&html),
        Err(ExtractError::MalformedField("releaseYear"))
    );
}

#[test]
fn test_missing_release_year_is_not_found() {
    let html = page(&[("year", "")]);
    assert_eq!(
        extract_from_html(&html),
        Err(ExtractError::FieldNotFound("releaseYear"))
    );
}

#[test]
fn test_actor_names_are_not_trimmed() {
    let html = page(&[(
        "actors",
        "<dl class=\"dv-meta-info size-small\"><dt>Darsteller:</dt>\n<dd>Ann , Bob,  Cy</dd></dl>",
    )]);
    let movie = extract_from_html(&html).unwrap();
    assert_eq!(movie.actors, vec!["Ann ", " Bob", "  Cy"]);
}

#[test]
fn test_actors_require_cast_label() {
    let html = page(&[(
        "actors",
        "<dl class=\"dv-meta-info size-small\"><dt>Regisseur:</dt>\n<dd>Ann</dd></dl>",
    )]);
    assert_eq!(
        extract_from_html(&html),
        Err(ExtractError::FieldNotFound("actors"))
    );
}

#[test]
fn test_actors_require_meta_info_parent() {
    let html = page(&[(
        "actors",
        "<dl class=\"dv-meta-info\"><dt>Darsteller:</dt>\n<dd>Ann</dd></dl>",
    )]);
    assert_eq!(
        extract_from_html(&html),
        Err(ExtractError::FieldNotFound("actors"))
    );
}

#[test]
fn test_missing_poster_fails_without_partial_record() {
    let html = fixture("no_poster.html");
    let result = extract_from_html(&html);
    assert_eq!(result, Err(ExtractError::FieldNotFound("poster")));
}

#[test]
fn test_poster_without_src_is_not_found() {
    let html = page(&[(
        "poster",
        r#"<div class="dp-meta-icon-container"><img alt="cover"></div>"#,
    )]);
    assert_eq!(
        extract_from_html(&html),
        Err(ExtractError::FieldNotFound("poster"))
    );
}

#[test]
fn test_first_failing_field_is_reported() {
    // Title is checked before poster.
    let html = "<html><body><p>nothing here</p></body></html>";
    let err = extract_from_html(html).unwrap_err();
    assert_eq!(err, ExtractError::FieldNotFound("title"));
    assert_eq!(err.field(), "title");
}

#[test]
fn test_extraction_is_idempotent() {
    let document = parse_document(&fixture("product.html"));
    let first = extract(&document).unwrap();
    let second = extract(&document).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_malformed_html() {
    let html = r#"<html><body><h1 id="aiv-content-title">Broken<span class="release-year">2001"#;
    // Unclosed tags still yield a tree; the cast block is simply absent.
    assert_eq!(
        extract_from_html(html),
        Err(ExtractError::FieldNotFound("actors"))
    );
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract_from_html(&html);
        }

        #[test]
        fn test_extract_never_panics_on_tag_soup(
            pieces in proptest::collection::vec(
                prop_oneof![
                    Just(r#"<h1 id="aiv-content-title">"#),
                    Just(r#"<span class="release-year">"#),
                    Just(r#"<dl class="dv-meta-info size-small">"#),
                    Just("<dt>Darsteller:</dt>"),
                    Just("<dd>"),
                    Just(r#"<div class="dp-meta-icon-container">"#),
                    Just("<img>"),
                    Just("</div>"),
                    Just("2015"),
                    Just("\n"),
                ],
                0..40,
            )
        ) {
            let html = pieces.concat();
            let _ = extract_from_html(&html);
        }
    }
}

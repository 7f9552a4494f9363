use regex::Regex;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;
use thiserror::Error;

/// Length of an ASIN, e.g. `B011J35W5O`.
pub const PRODUCT_ID_LENGTH: usize = 10;

static ALPHANUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("Failed to compile alphanumeric regex"));

/// Normalizes `raw` to upper case and checks it against the ASIN format.
///
/// Only ASCII letters are upper-cased. Any other character keeps its length
/// and fails the alphanumeric check.
///
/// The normalized string is returned even when invalid so callers can echo
/// it back in diagnostics.
pub fn validate(raw: &str) -> (String, bool) {
    let normalized = raw.to_ascii_uppercase();

    let valid = normalized.len() == PRODUCT_ID_LENGTH
        && normalized.starts_with('B')
        && ALPHANUMERIC_REGEX.is_match(&normalized);

    (normalized, valid)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid amazon id: {normalized}")]
pub struct InvalidProductId {
    pub normalized: String,
}

/// A validated, upper-cased Amazon product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn parse(raw: &str) -> Result<Self, InvalidProductId> {
        match validate(raw) {
            (normalized, true) => Ok(Self(normalized)),
            (normalized, false) => Err(InvalidProductId { normalized }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("field not found: {0}")]
    FieldNotFound(&'static str),

    #[error("malformed field: {0}")]
    MalformedField(&'static str),
}

impl ExtractError {
    /// Name of the record field that could not be populated.
    pub fn field(&self) -> &'static str {
        match self {
            Self::FieldNotFound(field) | Self::MalformedField(field) => field,
        }
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    extractor::ExtractError, fetcher::FetchError, movies::dtos::ErrorResponse,
    product_id::InvalidProductId,
};

/// Every way a movie lookup can fail, one variant per pipeline stage.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("invalid amazon id: {0}")]
    InvalidIdentifier(String),

    #[error("product not available")]
    UpstreamNotFound,

    #[error("upstream transport failure: {0}")]
    TransportFailure(#[source] FetchError),

    #[error("could not parse product page: {0}")]
    ParseFailure(#[source] FetchError),

    #[error(transparent)]
    Extraction(#[from] ExtractError),
}

impl From<InvalidProductId> for LookupError {
    fn from(err: InvalidProductId) -> Self {
        Self::InvalidIdentifier(err.normalized)
    }
}

impl From<FetchError> for LookupError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound => Self::UpstreamNotFound,
            err if err.is_undecodable() => Self::ParseFailure(err),
            err => Self::TransportFailure(err),
        }
    }
}

impl LookupError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamNotFound => StatusCode::NOT_FOUND,
            Self::TransportFailure(_) => StatusCode::BAD_GATEWAY,
            Self::ParseFailure(_) | Self::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn to_body(&self) -> ErrorResponse {
        match self {
            Self::InvalidIdentifier(id) => ErrorResponse {
                error: "invalid amazon id".to_string(),
                id: Some(id.clone()),
                field: None,
            },
            Self::Extraction(err) => ErrorResponse {
                error: err.to_string(),
                id: None,
                field: Some(err.field().to_string()),
            },
            other => ErrorResponse::new(other.to_string()),
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_body())).into_response()
    }
}

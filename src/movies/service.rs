use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::{
    extractor::{self, MovieRecord},
    fetcher::PageFetcher,
    movies::error::LookupError,
    product_id::ProductId,
};

/// Runs validate → fetch → parse → extract for one identifier.
#[derive(Clone)]
pub struct MovieService {
    fetcher: Arc<dyn PageFetcher>,
}

impl MovieService {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    #[instrument(skip_all, fields(amazon_id = %raw_id))]
    pub async fn lookup(&self, raw_id: &str) -> Result<MovieRecord, LookupError> {
        let result = self.run(raw_id).await;

        match &result {
            Ok(movie) => info!(
                title = %movie.title,
                release_year = movie.release_year,
                similar = movie.similar_ids.len(),
                "Extracted movie"
            ),
            Err(err) => warn!(error = %err, "Movie lookup failed"),
        }

        result
    }

    async fn run(&self, raw_id: &str) -> Result<MovieRecord, LookupError> {
        let id = ProductId::parse(raw_id)?;

        let page = self.fetcher.fetch_product(&id).await?;
        info!(
            url = %page.url_final,
            charset = ?page.charset,
            size = page.body_utf8.len(),
            "Fetched product page"
        );

        Ok(extractor::extract_from_html(&page.body_utf8)?)
    }
}

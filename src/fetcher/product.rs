use async_trait::async_trait;
use url::Url;

use crate::{
    fetcher::{client::fetch, errors::FetchError, types::PageResponse},
    product_id::ProductId,
};

/// Source of product pages, keyed by validated identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_product(&self, id: &ProductId) -> Result<PageResponse, FetchError>;
}

/// Fetches pages over HTTP from `<base_url><id>`.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    base_url: Url,
}

impl HttpPageFetcher {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    pub fn product_url(&self, id: &ProductId) -> Result<Url, FetchError> {
        Ok(self.base_url.join(id.as_str())?)
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_product(&self, id: &ProductId) -> Result<PageResponse, FetchError> {
        let url = self.product_url(id)?;
        fetch(url.as_str()).await
    }
}

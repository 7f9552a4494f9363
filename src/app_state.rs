use crate::{fetcher::PageFetcher, movies::MovieService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub movies: MovieService,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            movies: MovieService::new(fetcher),
        }
    }
}

#![allow(dead_code)]

use axum::Router;
use std::{fs, sync::Arc};
use url::Url;
use wiremock::MockServer;

use movie_lookup::{app_state::AppState, fetcher::HttpPageFetcher, routes};

pub const PRODUCT_PATH: &str = "/gp/product/";

pub fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

pub fn fetcher_for(server: &MockServer) -> HttpPageFetcher {
    let base = Url::parse(&format!("{}{}", server.uri(), PRODUCT_PATH)).unwrap();
    HttpPageFetcher::new(base)
}

pub fn test_app(server: &MockServer) -> Router {
    routes::router(AppState::new(Arc::new(fetcher_for(server))))
}

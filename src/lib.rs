pub mod app_state;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod movies;
pub mod openapi;
pub mod product_id;
pub mod routes;
pub mod telemetry;

pub mod client;
pub mod errors;
pub mod pipeline;
pub mod product;
pub mod types;

pub use client::fetch;
pub use errors::FetchError;
pub use product::{HttpPageFetcher, PageFetcher};
pub use types::{Charset, PageResponse};

#[cfg(test)]
pub use product::MockPageFetcher;

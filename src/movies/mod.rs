pub mod dtos;
pub mod error;
pub mod handlers;
pub mod service;

pub use error::LookupError;
pub use service::MovieService;

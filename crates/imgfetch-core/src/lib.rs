pub mod clock;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod storage;
pub mod transport;
pub mod url_model;

pub use error::{ErrorKind, FetchError};
pub use fetcher::{FetchResult, ImageFetcher};

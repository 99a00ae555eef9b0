//! HTTP transport: one buffered GET per fetch.
//!
//! The [`Transport`] trait is the seam between the fetch pipeline and the
//! network so the pipeline can be driven without sockets in tests.

mod classify;
mod curl_easy;
mod status;

pub use classify::classify_curl_error;
pub use curl_easy::CurlTransport;
pub use status::{canonical_reason, parse_status_line};

use crate::error::FetchError;
use std::time::Duration;
use url::Url;

/// Fully buffered response to a GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Final status code (after redirects).
    pub status: u32,
    /// Reason phrase of the final status line, or the canonical one if the server sent none.
    pub reason: String,
    pub body: Vec<u8>,
    /// URL of the final response after redirects.
    pub effective_url: String,
}

impl HttpResponse {
    /// Status >= 400 is a failure; redirects have already been followed.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.status >= 400 {
            return Err(FetchError::Http {
                status: self.status,
                reason: self.reason,
                url: self.effective_url,
            });
        }
        Ok(self)
    }
}

/// Performs a GET with a total timeout, following redirects, without custom headers.
pub trait Transport {
    fn get(&self, url: &Url, timeout: Duration) -> Result<HttpResponse, FetchError>;
}

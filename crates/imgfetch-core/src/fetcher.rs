//! The fetch pipeline: validate, GET, check status, name, write.

use crate::clock::{Clock, SystemClock};
use crate::config::FetcherConfig;
use crate::error::FetchError;
use crate::storage;
use crate::transport::{CurlTransport, Transport};
use crate::url_model::{resolve_filename, validate_url};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Total request timeout unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Path of the saved file, or the categorized reason nothing was saved.
pub type FetchResult = Result<PathBuf, FetchError>;

/// Fetches one image per call into a destination directory.
///
/// Holds no state between calls. Same-named files in the destination are
/// overwritten.
#[derive(Debug, Clone)]
pub struct ImageFetcher<T = CurlTransport, C = SystemClock> {
    transport: T,
    clock: C,
    timeout: Duration,
}

impl ImageFetcher {
    /// Curl transport, system clock, 10 second timeout.
    pub fn new() -> Self {
        Self::with_parts(CurlTransport, SystemClock)
    }

    pub fn from_config(cfg: &FetcherConfig) -> Self {
        Self::new().with_timeout(cfg.timeout())
    }
}

impl Default for ImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport, C: Clock> ImageFetcher<T, C> {
    pub fn with_parts(transport: T, clock: C) -> Self {
        Self {
            transport,
            clock,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Zero is ignored: curl reads it as "no limit".
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if !timeout.is_zero() {
            self.timeout = timeout;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Downloads `url` into `destination_dir`, creating the directory if needed.
    ///
    /// The body is buffered fully before anything is written, so no file is
    /// created on any failure path.
    pub fn fetch(&self, url: &str, destination_dir: &Path) -> FetchResult {
        let result = self.run(url, destination_dir);
        match &result {
            Ok(path) => tracing::info!("fetched {} -> {}", url.trim(), path.display()),
            Err(e) => tracing::warn!("fetch {:?} failed ({}): {}", url.trim(), e.kind(), e),
        }
        result
    }

    fn run(&self, input: &str, destination_dir: &Path) -> FetchResult {
        storage::ensure_dir(destination_dir)?;

        let url = validate_url(input)?;
        tracing::debug!("GET {} (timeout {:?})", url, self.timeout);
        let response = self.transport.get(&url, self.timeout)?.error_for_status()?;

        let filename = resolve_filename(input, &self.clock);
        let path = destination_dir.join(&filename);
        storage::write_file(&path, &response.body)?;
        tracing::debug!("wrote {} bytes to {}", response.body.len(), path.display());
        Ok(path)
    }
}

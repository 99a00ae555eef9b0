//! Fetch failure taxonomy.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Category of a failed fetch. Exactly one applies to every failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidUrl,
    Http,
    Connection,
    Timeout,
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidUrl => "invalid URL",
            ErrorKind::Http => "HTTP error",
            ErrorKind::Connection => "connection error",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Unexpected => "unexpected error",
        };
        f.write_str(s)
    }
}

/// Error returned by a single fetch. Nothing is written to disk when one is returned,
/// except for the destination directory itself.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Input is empty, relative, unparseable, or not http/https.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Server answered with status >= 400.
    #[error("{status} {} Error: {}for url: {url}", status_class(.status), reason_prefix(.reason))]
    Http {
        status: u32,
        reason: String,
        url: String,
    },

    /// DNS failure, refused connection, reset, empty reply.
    #[error("connection error: {0}")]
    Connection(String),

    /// No complete response within the timeout window.
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Directory creation or file write failed.
    #[error("{}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other transport failure (TLS, redirect loop, ...).
    #[error("{0}")]
    Other(String),
}

fn status_class(status: &u32) -> &'static str {
    if *status >= 500 {
        "Server"
    } else {
        "Client"
    }
}

/// HTTP/2 responses carry no reason phrase; skip it instead of leaving a gap.
fn reason_prefix(reason: &str) -> String {
    if reason.is_empty() {
        String::new()
    } else {
        format!("{} ", reason)
    }
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            FetchError::Http { .. } => ErrorKind::Http,
            FetchError::Connection(_) => ErrorKind::Connection,
            FetchError::Timeout(_) => ErrorKind::Timeout,
            FetchError::Storage { .. } | FetchError::Other(_) => ErrorKind::Unexpected,
        }
    }

    pub(crate) fn invalid_url(url: &str, reason: impl fmt::Display) -> Self {
        FetchError::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

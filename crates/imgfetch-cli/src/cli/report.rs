//! One-line human-readable outcome.

use imgfetch_core::{ErrorKind, FetchResult};

pub fn status_line(result: &FetchResult) -> String {
    match result {
        Ok(path) => format!(
            "✅ Image successfully fetched and saved as: {}",
            path.display()
        ),
        Err(e) => match e.kind() {
            ErrorKind::InvalidUrl => {
                "❌ Invalid URL. Please include 'http://' or 'https://'.".to_string()
            }
            ErrorKind::Http => format!("❌ HTTP error occurred: {}", e),
            ErrorKind::Connection => {
                "❌ Connection error. Please check your internet connection.".to_string()
            }
            ErrorKind::Timeout => "❌ Request timed out. Try again later.".to_string(),
            ErrorKind::Unexpected => format!("❌ An unexpected error occurred: {}", e),
        },
    }
}

/// Reported when the URL could not even be read from the prompt.
pub fn input_error_line(err: &anyhow::Error) -> String {
    format!("❌ An unexpected error occurred: {:#}", err)
}

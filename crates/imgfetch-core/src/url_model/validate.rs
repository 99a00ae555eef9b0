//! Input URL validation.

use crate::error::FetchError;
use url::Url;

/// Parses user input into an absolute http/https URL.
///
/// Surrounding whitespace is trimmed. Input without a scheme
/// (`example.com/cat.png`), unparseable input, and schemes other than
/// `http`/`https` are rejected as [`FetchError::InvalidUrl`].
pub fn validate_url(input: &str) -> Result<Url, FetchError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FetchError::invalid_url(input, "empty URL"));
    }
    let url = Url::parse(input).map_err(|e| FetchError::invalid_url(input, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::invalid_url(
            input,
            format!("unsupported scheme {:?}", other),
        )),
    }
}

//! Filename extraction from the URL path as typed.

use chrono::NaiveDateTime;

/// Path component of a URL string, exactly as written: after the scheme and
/// authority, before any `?` query or `#` fragment.
fn raw_path(input: &str) -> &str {
    let rest = match input.split_once(':') {
        Some((_, rest)) => rest,
        None => input,
    };
    let rest = match rest.strip_prefix("//") {
        Some(after) => after
            .find(|c| matches!(c, '/' | '?' | '#'))
            .map_or("", |i| &after[i..]),
        None => rest,
    };
    let end = rest.find(|c| matches!(c, '?' | '#')).unwrap_or(rest.len());
    &rest[..end]
}

/// Extracts the basename of the URL path: everything after the last `/`.
///
/// Works on the input string rather than a parsed `Url` so the name is kept
/// byte for byte: no percent-encoding of spaces or non-ASCII, no decoding of
/// existing `%XX` escapes. Returns `None` when the path is empty or ends in
/// `/`, and for the `.`/`..` entries, which cannot be file names.
pub fn filename_from_url_path(input: &str) -> Option<String> {
    let segment = raw_path(input.trim()).rsplit('/').next()?;
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Timestamped name used when the URL path has no basename. Always `.jpg`.
pub fn fallback_filename(now: NaiveDateTime) -> String {
    format!("image_{}.jpg", now.format("%Y%m%d_%H%M%S"))
}

//! URL modeling and filename derivation.
//!
//! Validates user input as an absolute http(s) URL and derives the local
//! filename from the URL path's basename, falling back to a timestamped name.

mod path;
mod validate;

pub use path::{fallback_filename, filename_from_url_path};
pub use validate::validate_url;

use crate::clock::Clock;

/// Resolves the filename for saving the URL typed as `input`.
///
/// Uses the last segment of the URL path exactly as written (never looking at
/// response headers). When the path ends in `/`, a name of the form
/// `image_YYYYMMDD_HHMMSS.jpg` is built from `clock`.
///
/// # Examples
///
/// - `https://example.com/images/cat.png?size=large` → `"cat.png"`
/// - `https://example.com/` → `"image_20240101_120000.jpg"` (at that local time)
pub fn resolve_filename<C: Clock + ?Sized>(input: &str, clock: &C) -> String {
    match filename_from_url_path(input) {
        Some(name) => name,
        None => fallback_filename(clock.now()),
    }
}

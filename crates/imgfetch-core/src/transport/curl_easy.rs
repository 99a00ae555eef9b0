//! libcurl-backed transport (single GET, body buffered in memory).

use super::{canonical_reason, classify_curl_error, parse_status_line, HttpResponse, Transport};
use crate::error::FetchError;
use std::str;
use std::time::Duration;
use url::Url;

/// Redirect hop limit; matches what common HTTP clients allow by default.
const MAX_REDIRECTS: u32 = 30;

/// Blocking transport using a fresh curl `Easy` handle per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlTransport;

impl Transport for CurlTransport {
    fn get(&self, url: &Url, timeout: Duration) -> Result<HttpResponse, FetchError> {
        let mut body: Vec<u8> = Vec::new();
        let mut status_lines: Vec<String> = Vec::new();
        // Option setup and info queries happen before or after any connection attempt.
        let classify = |e: curl::Error| classify_curl_error(&e, url.as_str(), timeout, true);

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str()).map_err(classify)?;
        easy.follow_location(true).map_err(classify)?;
        easy.max_redirections(MAX_REDIRECTS).map_err(classify)?;
        easy.timeout(timeout).map_err(classify)?;

        let performed = {
            let mut transfer = easy.transfer();
            // Every response in a redirect chain sends a status line; the last one wins.
            transfer
                .header_function(|data| {
                    if let Ok(s) = str::from_utf8(data) {
                        if s.starts_with("HTTP/") {
                            status_lines.push(s.trim_end().to_string());
                        }
                    }
                    true
                })
                .map_err(classify)?;
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(classify)?;
            transfer.perform()
        };
        if let Err(e) = performed {
            // CURLINFO_CONNECT_TIME stays zero until a connection is established.
            let connected = easy.connect_time().map_or(false, |t| !t.is_zero());
            return Err(classify_curl_error(&e, url.as_str(), timeout, connected));
        }

        let status = easy.response_code().map_err(classify)?;
        let reason = status_lines
            .last()
            .and_then(|line| parse_status_line(line))
            .and_then(|(_, reason)| reason)
            .unwrap_or_else(|| canonical_reason(status).to_string());
        let effective_url = easy
            .effective_url()
            .ok()
            .flatten()
            .unwrap_or(url.as_str())
            .to_string();

        tracing::debug!(
            "GET {} -> {} ({} bytes, final url {})",
            url,
            status,
            body.len(),
            effective_url
        );

        Ok(HttpResponse {
            status,
            reason,
            body,
            effective_url,
        })
    }
}

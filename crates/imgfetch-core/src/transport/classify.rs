//! Classify curl errors into fetch error categories.

use crate::error::FetchError;
use std::time::Duration;

/// Maps a curl error for a request to `url` into a [`FetchError`].
///
/// `timeout` is the limit that was in effect. `connected` says whether a TCP
/// connection to the server was ever established: a timeout before that is a
/// connection failure, not a slow response.
pub fn classify_curl_error(
    e: &curl::Error,
    url: &str,
    timeout: Duration,
    connected: bool,
) -> FetchError {
    if e.is_operation_timedout() {
        if is_connect_timeout(e, connected) {
            return FetchError::Connection(describe(e));
        }
        return FetchError::Timeout(timeout);
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return FetchError::Connection(describe(e));
    }
    if e.is_url_malformed() || e.is_unsupported_protocol() {
        return FetchError::InvalidUrl {
            url: url.to_string(),
            reason: describe(e),
        };
    }
    FetchError::Other(describe(e))
}

/// libcurl words connect-phase timeouts as "Connection timed out after N ms".
fn is_connect_timeout(e: &curl::Error, connected: bool) -> bool {
    !connected
        || e.extra_description()
            .is_some_and(|extra| extra.starts_with("Connection timed out"))
}

fn describe(e: &curl::Error) -> String {
    match e.extra_description() {
        Some(extra) => format!("{}: {}", e.description(), extra),
        None => e.description().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    // CURLcode values from curl.h (an unsigned enum on Linux).
    const CURLE_UNSUPPORTED_PROTOCOL: u32 = 1;
    const CURLE_COULDNT_RESOLVE_HOST: u32 = 6;
    const CURLE_COULDNT_CONNECT: u32 = 7;
    const CURLE_OPERATION_TIMEDOUT: u32 = 28;
    const CURLE_TOO_MANY_REDIRECTS: u32 = 47;
    const CURLE_GOT_NOTHING: u32 = 52;

    fn kind_when(code: u32, connected: bool) -> ErrorKind {
        let e = curl::Error::new(code);
        classify_curl_error(&e, "http://x/", Duration::from_secs(10), connected).kind()
    }

    fn kind(code: u32) -> ErrorKind {
        kind_when(code, true)
    }

    #[test]
    fn timeout_after_connecting() {
        assert_eq!(kind(CURLE_OPERATION_TIMEDOUT), ErrorKind::Timeout);
    }

    #[test]
    fn timeout_while_connecting_is_connection_error() {
        assert_eq!(kind_when(CURLE_OPERATION_TIMEDOUT, false), ErrorKind::Connection);
    }

    #[test]
    fn connect_timeout_message_wins_over_connected_flag() {
        let mut e = curl::Error::new(CURLE_OPERATION_TIMEDOUT);
        e.set_extra("Connection timed out after 10001 milliseconds".to_string());
        let err = classify_curl_error(&e, "http://x/", Duration::from_secs(10), true);
        assert_eq!(err.kind(), ErrorKind::Connection);

        let mut e = curl::Error::new(CURLE_OPERATION_TIMEDOUT);
        e.set_extra("Operation timed out after 10000 milliseconds with 5 bytes".to_string());
        let err = classify_curl_error(&e, "http://x/", Duration::from_secs(10), true);
        assert_eq!(err.kind(), ErrorKind::Timeout);
    }

    #[test]
    fn connection_failures() {
        assert_eq!(kind(CURLE_COULDNT_RESOLVE_HOST), ErrorKind::Connection);
        assert_eq!(kind(CURLE_COULDNT_CONNECT), ErrorKind::Connection);
        assert_eq!(kind(CURLE_GOT_NOTHING), ErrorKind::Connection);
    }

    #[test]
    fn protocol_rejected_by_curl_is_invalid_url() {
        assert_eq!(kind(CURLE_UNSUPPORTED_PROTOCOL), ErrorKind::InvalidUrl);
    }

    #[test]
    fn everything_else_unexpected() {
        assert_eq!(kind(CURLE_TOO_MANY_REDIRECTS), ErrorKind::Unexpected);
    }
}

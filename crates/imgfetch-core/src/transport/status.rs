//! Status line parsing for collected response header lines.

/// Parses `HTTP/1.1 404 Not Found` into `(404, Some("Not Found"))`.
/// HTTP/2 status lines (`HTTP/2 404`) carry no reason phrase.
pub fn parse_status_line(line: &str) -> Option<(u32, Option<String>)> {
    let line = line.trim();
    if !line.starts_with("HTTP/") {
        return None;
    }
    let mut parts = line.splitn(3, ' ');
    let _version = parts.next()?;
    let code = parts.next()?.trim().parse::<u32>().ok()?;
    let reason = parts
        .next()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(String::from);
    Some((code, reason))
}

/// Reason phrase for common status codes, used when the server sent none.
pub fn canonical_reason(status: u32) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        304 => "Not Modified",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        410 => "Gone",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "",
    }
}

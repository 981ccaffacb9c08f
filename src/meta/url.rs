//! Absolute URL construction from the site base URL and page paths.
//!
//! Invariants of the joined URL:
//! - exactly one `/` between base and path, never `//` inside the path
//! - a trailing slash is kept only when the path had one
//! - path segments are percent-encoded, unreserved characters are kept

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters encoded inside a path segment (RFC 3986 unreserved are kept).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Whether `s` already is an absolute http(s) URL.
pub fn is_absolute(s: &str) -> bool {
    url::Url::parse(s).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// Join `path` onto `base`, e.g. `("https://trembach.law", "foo-bar")` ->
/// `"https://trembach.law/foo-bar"`.
///
/// Absolute URLs are returned verbatim; an empty path yields the site root.
pub fn absolute_url(base: &str, path: &str) -> String {
    let path = path.trim();
    if is_absolute(path) {
        return path.to_string();
    }

    let base = base.trim_end_matches('/');
    let trailing = path.ends_with('/');

    let encoded = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/");

    match (encoded.is_empty(), trailing) {
        (true, _) => format!("{base}/"),
        (false, true) => format!("{base}/{encoded}/"),
        (false, false) => format!("{base}/{encoded}"),
    }
}

/// Canonical link for a page, `None` when the page declares no canonical.
pub fn canonical_url(base: &str, canonical: &str) -> Option<String> {
    if canonical.trim().is_empty() {
        None
    } else {
        Some(absolute_url(base, canonical))
    }
}

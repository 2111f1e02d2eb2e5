/// URL helpers for bookmarks: normalization, validation and favicon lookup
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::config::{FAVICON_SERVICE_URL, FAVICON_SIZE};

/// Accepted bookmark URLs: optional scheme and `www.`, a dotted host, optional path
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?([a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)+)(/[a-zA-Z0-9./?=&%#_-]*)?$")
        .expect("URL pattern is a valid regex")
});

/// Trim the URL and prefix `http://` when no http(s) scheme is present
///
/// Examples:
/// - `example.com` → `http://example.com`
/// - ` https://github.com ` → `https://github.com`
pub fn format_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}

/// Check that a user-entered URL looks like a web address
pub fn is_valid_url(url: &str) -> bool {
    URL_PATTERN.is_match(&format_url(url))
}

/// Hostname of the (formatted) URL, lowercased
pub fn extract_hostname(url: &str) -> Option<String> {
    let parsed = Url::parse(&format_url(url)).ok()?;
    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(|host| host.to_string())
}

/// Favicon service URL for the bookmark's host, or an empty string
pub fn favicon_url(url: &str) -> String {
    match extract_hostname(url) {
        Some(host) => format!("{}?domain={}&sz={}", FAVICON_SERVICE_URL, host, FAVICON_SIZE),
        None => String::new(),
    }
}

//! Domain grouping of endpoint URLs.
//!
//! Endpoints are aggregated by the authority portion of their URL. The key is
//! derived with two plain string splits rather than a URL parser, so it is
//! total: every input string, well-formed or not, maps to some key.

/// Extracts the domain key from an endpoint URL.
///
/// Everything after the first `//` is kept (the whole string if there is
/// none), then cut at the first `/`. What remains is host, optional port and
/// optional userinfo.
///
/// ```
/// use pulsecheck_core::extract_domain;
///
/// assert_eq!(extract_domain("https://api.example.com/v1/x"), "api.example.com");
/// assert_eq!(extract_domain("example.com/path"), "example.com");
/// assert_eq!(extract_domain("http://a.b:8080/"), "a.b:8080");
/// ```
pub fn extract_domain(url: &str) -> &str {
    let rest = url.split_once("//").map_or(url, |(_, rest)| rest);
    rest.split_once('/').map_or(rest, |(authority, _)| authority)
}

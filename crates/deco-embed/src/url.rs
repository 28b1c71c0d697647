//! Minimal URL splitting for provider classification.
//!
//! Classification only needs the host, the path and one query
//! parameter, so this splits `scheme://host/path?query` by hand
//! instead of pulling in a URL library.

/// Pieces of a split URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UrlParts<'a> {
    /// Lowercased host with any port stripped.
    pub host: String,
    /// Path including the leading slash (empty when absent).
    pub path: &'a str,
    /// Raw query string without the `?` (empty when absent).
    pub query: &'a str,
}

/// Split a URL into host, path and query.
///
/// Returns `None` when the input has no `scheme://` prefix or an empty
/// host - the caller then falls back to bare-handle classification.
pub(crate) fn split_url(input: &str) -> Option<UrlParts<'_>> {
    let (scheme, rest) = input.split_once("://")?;
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.') {
        return None;
    }

    // Drop any fragment first
    let rest = rest.split('#').next().unwrap_or(rest);

    let (authority, path_and_query) = match rest.find(['/', '?']) {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };
    if authority.is_empty() {
        return None;
    }

    // Strip userinfo and port from the authority
    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host);
    if host.is_empty() {
        return None;
    }

    let (path, query) = match path_and_query.split_once('?') {
        Some((path, query)) => (path, query),
        None => (path_and_query, ""),
    };

    Some(UrlParts {
        host: host.to_ascii_lowercase(),
        path,
        query,
    })
}

/// Value of a query parameter, without percent-decoding.
pub(crate) fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// First non-empty path segment.
pub(crate) fn first_segment(path: &str) -> Option<&str> {
    path.split('/').find(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn splits_host_path_query() {
        let parts = split_url("https://www.youtube.com/watch?v=abc123").unwrap();
        assert_eq!(parts.host, "www.youtube.com");
        assert_eq!(parts.path, "/watch");
        assert_eq!(parts.query, "v=abc123");
    }

    #[test]
    fn host_is_lowercased_and_port_stripped() {
        let parts = split_url("https://Twitter.COM:443/someuser").unwrap();
        assert_eq!(parts.host, "twitter.com");
        assert_eq!(parts.path, "/someuser");
    }

    #[test]
    fn fragment_is_dropped() {
        let parts = split_url("https://example.com/page#section").unwrap();
        assert_eq!(parts.path, "/page");
        assert_eq!(parts.query, "");
    }

    #[test]
    fn no_scheme_is_none() {
        assert!(split_url("youtube.com/watch?v=abc").is_none());
        assert!(split_url("@someuser").is_none());
        assert!(split_url("someuser").is_none());
    }

    #[test]
    fn empty_host_is_none() {
        assert!(split_url("https://").is_none());
        assert!(split_url("https:///path").is_none());
    }

    #[test]
    fn query_param_lookup() {
        assert_eq!(query_param("v=abc&t=10", "v"), Some("abc"));
        assert_eq!(query_param("t=10&v=abc", "v"), Some("abc"));
        assert_eq!(query_param("t=10", "v"), None);
        assert_eq!(query_param("", "v"), None);
    }

    #[test]
    fn first_segment_skips_empty() {
        assert_eq!(first_segment("/abc123"), Some("abc123"));
        assert_eq!(first_segment("//abc"), Some("abc"));
        assert_eq!(first_segment("/"), None);
        assert_eq!(first_segment(""), None);
    }
}

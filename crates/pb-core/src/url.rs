//! URL slicing helpers
//!
//! These functions work directly on string slices and only allocate when a
//! path has to be synthesized. They expect absolute URLs from the measurement
//! layer, but a bare path is accepted wherever a page URL is expected.

use std::borrow::Cow;

// =============================================================================
// Scheme
// =============================================================================

/// Inline payload URLs are never classified or aggregated.
#[inline]
pub fn is_data_url(url: &str) -> bool {
    let bytes = url.trim_start().as_bytes();
    bytes.len() >= 5 && bytes[..5].eq_ignore_ascii_case(b"data:")
}

/// Get the position after "://".
#[inline]
pub fn get_scheme_end(url: &str) -> Option<usize> {
    let bytes = url.as_bytes();

    let colon_pos = bytes.iter().position(|&b| b == b':')?;

    // Scheme must come before any path, query or fragment
    if bytes[..colon_pos].iter().any(|&b| b == b'/' || b == b'?' || b == b'#') {
        return None;
    }

    if bytes.len() > colon_pos + 2
        && bytes[colon_pos + 1] == b'/'
        && bytes[colon_pos + 2] == b'/'
    {
        return Some(colon_pos + 3);
    }

    None
}

// =============================================================================
// Host
// =============================================================================

/// Get the start and end positions of the hostname in a URL.
#[inline]
pub fn get_host_position(url: &str) -> Option<(usize, usize)> {
    let scheme_end = get_scheme_end(url)?;
    let bytes = url.as_bytes();

    // Skip userinfo
    let mut host_start = scheme_end;
    for (i, &b) in bytes.iter().enumerate().skip(scheme_end) {
        if b == b'@' {
            host_start = i + 1;
            break;
        }
        if b == b'/' || b == b'?' || b == b'#' {
            break;
        }
    }

    // IPv6 literal keeps its brackets
    if bytes.get(host_start) == Some(&b'[') {
        let close = bytes[host_start..].iter().position(|&b| b == b']')?;
        return Some((host_start, host_start + close + 1));
    }

    let mut host_end = bytes.len();
    for (i, &b) in bytes.iter().enumerate().skip(host_start) {
        if b == b'/' || b == b'?' || b == b'#' || b == b':' {
            host_end = i;
            break;
        }
    }

    Some((host_start, host_end))
}

/// Host without port or userinfo. Returns a slice into the original URL.
#[inline]
pub fn extract_host(url: &str) -> Option<&str> {
    let (host_start, host_end) = get_host_position(url)?;
    let host = &url[host_start..host_end];
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

// =============================================================================
// Path
// =============================================================================

/// Path plus query string, without the fragment. This is what budget path
/// patterns are matched against.
pub fn extract_path_and_query(url: &str) -> Cow<'_, str> {
    let path_start = match get_scheme_end(url) {
        Some(scheme_end) => {
            let rest = &url.as_bytes()[scheme_end..];
            match rest.iter().position(|&b| b == b'/' || b == b'?' || b == b'#') {
                Some(i) => scheme_end + i,
                None => return Cow::Borrowed("/"),
            }
        }
        None if url.starts_with('/') => 0,
        None => return Cow::Borrowed("/"),
    };

    let tail = &url[path_start..];
    let tail = match tail.find('#') {
        Some(hash_pos) => &tail[..hash_pos],
        None => tail,
    };

    if tail.is_empty() {
        Cow::Borrowed("/")
    } else if tail.starts_with('?') {
        // Empty path before a query is "/"
        Cow::Owned(format!("/{tail}"))
    } else {
        Cow::Borrowed(tail)
    }
}

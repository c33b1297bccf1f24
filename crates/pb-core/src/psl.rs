//! Registrable-domain (eTLD+1) lookup
//!
//! Used when a budget does not list its first-party hostnames: a request is
//! first-party when it shares a root domain with the main resource. The
//! suffix data is parsed by the caller and passed in, so lookups here never
//! touch the filesystem.
//!
//! # Examples
//!
//! ```
//! use pb_core::psl::{get_root_domain, parse_suffix_list};
//!
//! let list = parse_suffix_list("com\nuk\nco.uk\n").unwrap();
//! assert_eq!(get_root_domain(&list, "sub.example.com"), "example.com");
//! assert_eq!(get_root_domain(&list, "sub.example.co.uk"), "example.co.uk");
//! ```

use std::net::IpAddr;

use publicsuffix::Psl;

pub use publicsuffix::List;

/// Parse Public Suffix List text (the `public_suffix_list.dat` format).
pub fn parse_suffix_list(text: &str) -> Result<List, publicsuffix::Error> {
    text.parse()
}

/// Get the root (registrable) domain for a hostname, lowercased.
///
/// IP literals, public suffixes themselves and hosts the list cannot split
/// are returned whole.
pub fn get_root_domain(list: &List, host: &str) -> String {
    let host = host.trim_end_matches('.').to_ascii_lowercase();

    if is_ip_literal(&host) {
        return host;
    }

    match list.domain(host.as_bytes()) {
        Some(domain) => String::from_utf8_lossy(domain.as_bytes()).into_owned(),
        None => host,
    }
}

fn is_ip_literal(host: &str) -> bool {
    host.starts_with('[') || host.parse::<IpAddr>().is_ok()
}

/// Check if two hosts share the same root domain.
pub fn root_domains_match(list: &List, host1: &str, host2: &str) -> bool {
    get_root_domain(list, host1) == get_root_domain(list, host2)
}

#[cfg(test)]
pub(crate) fn test_suffix_list() -> List {
    const TEST_LIST: &str = "\
// ===BEGIN ICANN DOMAINS===
com
net
org
io
uk
co.uk
ar
com.ar
sg
com.sg
// ===END ICANN DOMAINS===
// ===BEGIN PRIVATE DOMAINS===
blogspot.com
github.io
// ===END PRIVATE DOMAINS===
";
    parse_suffix_list(TEST_LIST).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_domain_simple() {
        let list = test_suffix_list();
        assert_eq!(get_root_domain(&list, "example.com"), "example.com");
        assert_eq!(get_root_domain(&list, "sub.example.com"), "example.com");
        assert_eq!(get_root_domain(&list, "a.b.Example.COM."), "example.com");
    }

    #[test]
    fn test_root_domain_two_part() {
        let list = test_suffix_list();
        assert_eq!(get_root_domain(&list, "sub.example.co.uk"), "example.co.uk");
        assert_eq!(get_root_domain(&list, "example.co.uk"), "example.co.uk");
        assert_eq!(get_root_domain(&list, "co.uk"), "co.uk");
        assert_eq!(get_root_domain(&list, "shop.example.com.ar"), "example.com.ar");
        assert_eq!(get_root_domain(&list, "www.store.com.sg"), "store.com.sg");
    }

    #[test]
    fn test_root_domain_private_suffix() {
        let list = test_suffix_list();
        assert_eq!(get_root_domain(&list, "alice.github.io"), "alice.github.io");
        assert_eq!(get_root_domain(&list, "cdn.alice.github.io"), "alice.github.io");
        assert_eq!(get_root_domain(&list, "news.blogspot.com"), "news.blogspot.com");
    }

    #[test]
    fn test_root_domain_single_label_and_ip() {
        let list = test_suffix_list();
        assert_eq!(get_root_domain(&list, "localhost"), "localhost");
        assert_eq!(get_root_domain(&list, "127.0.0.1"), "127.0.0.1");
        assert_eq!(get_root_domain(&list, "[::1]"), "[::1]");
    }

    #[test]
    fn test_root_domains_match() {
        let list = test_suffix_list();
        assert!(root_domains_match(&list, "cdn.example.com", "www.example.com"));
        assert!(!root_domains_match(&list, "example.com", "example.org"));
        assert!(!root_domains_match(&list, "10.0.0.1", "10.0.0.2"));
        assert!(!root_domains_match(&list, "tracker.evil.com.ar", "shop.example.com.ar"));
        assert!(!root_domains_match(&list, "mallory.github.io", "alice.github.io"));
    }
}

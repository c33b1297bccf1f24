//! First-party / third-party classification

use crate::psl::{root_domains_match, List};
use crate::types::Budget;
use crate::url::extract_host;

/// Check a hostname against a first-party allow-list.
///
/// Bare entries need an exact match. A `*.example.com` entry matches any
/// host ending in `example.com`, including `example.com` itself. Comparison
/// is case-sensitive on the raw host.
pub fn is_first_party(hostname: &str, allow_list: &[String]) -> bool {
    allow_list.iter().any(|entry| match entry.strip_prefix("*.") {
        Some(suffix) => hostname.ends_with(suffix),
        None => hostname == entry,
    })
}

/// Decides party status for every record of one page evaluation.
#[derive(Clone, Copy)]
pub enum PartyClassifier<'a> {
    /// Hostnames from the governing budget's options
    AllowList(&'a [String]),
    /// Same root domain as the main resource
    SameRootDomain { main_host: &'a str, suffixes: &'a List },
}

impl<'a> PartyClassifier<'a> {
    /// Use the budget's allow-list when it has one, otherwise fall back to
    /// the main resource's root domain.
    pub fn new(budget: Option<&'a Budget>, main_resource_url: &'a str, suffixes: &'a List) -> Self {
        match budget.and_then(Budget::first_party_hostnames) {
            Some(hosts) => Self::AllowList(hosts),
            None => Self::SameRootDomain {
                main_host: extract_host(main_resource_url).unwrap_or(""),
                suffixes,
            },
        }
    }

    /// `hostname` must be non-empty; callers skip records without one.
    pub fn is_first_party(&self, hostname: &str) -> bool {
        match self {
            Self::AllowList(hosts) => is_first_party(hostname, hosts),
            Self::SameRootDomain { main_host, suffixes } => {
                !main_host.is_empty() && root_domains_match(suffixes, hostname, main_host)
            }
        }
    }

    pub fn is_third_party(&self, hostname: &str) -> bool {
        !self.is_first_party(hostname)
    }
}

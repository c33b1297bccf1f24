//! Bundled Public Suffix List
//!
//! Backs the root-domain fallback for budgets that do not list their
//! first-party hostnames. Callers parse it once and pass the list into
//! every evaluation.

use pb_core::psl::{parse_suffix_list, List};

use crate::error::ConfigError;

/// Snapshot of <https://publicsuffix.org/list/public_suffix_list.dat>.
pub const PUBLIC_SUFFIX_LIST: &str = include_str!("../data/public_suffix_list.dat");

/// Parse suffix list text, ICANN and private sections alike.
pub fn load_suffix_list(text: &str) -> Result<List, ConfigError> {
    parse_suffix_list(text).map_err(|e| ConfigError::SuffixList {
        message: e.to_string(),
    })
}

/// Parse the bundled suffix list.
pub fn default_suffix_list() -> Result<List, ConfigError> {
    load_suffix_list(PUBLIC_SUFFIX_LIST)
}

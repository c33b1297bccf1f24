//! PageBudget Core Library
//!
//! This crate scores measured page-load data against declared performance
//! budgets. It does no I/O: callers hand it validated budgets (see the
//! `pb-config` crate), network records and timing values, and get back
//! result rows for the reporting layer.
//!
//! # Modules
//!
//! - `pattern`: robots.txt-style path pattern matching
//! - `hostname`: first-party / third-party classification
//! - `psl`: Public Suffix List root-domain lookup for the origin fallback
//! - `selector`: governing budget selection
//! - `summary`: resource classification and per-type aggregation
//! - `scorer`: size, count and timing scoring
//! - `report`: full page evaluation
//! - `url`: URL slicing helpers
//! - `types`: Shared type definitions

pub mod hostname;
pub mod pattern;
pub mod psl;
pub mod report;
pub mod scorer;
pub mod selector;
pub mod summary;
pub mod types;
pub mod url;

// Re-export commonly used types
pub use hostname::{is_first_party, PartyClassifier};
pub use pattern::{is_valid_pattern, matches, url_matches};
pub use psl::{parse_suffix_list, List as SuffixList};
pub use report::{evaluate, evaluate_with_budget};
pub use scorer::{rollup, score_resource, score_timing, ResourceUnit, Score};
pub use selector::select_budget;
pub use summary::{summarize, summary_rows, third_party_summary, ResourceSummary};
pub use types::{
    Budget, BudgetOptions, BudgetSet, Evaluation, NetworkRecord, PageMeasurements, ResourceBudget,
    ResourceStat, ResourceType, ScoredRow, SummaryRow, TimingBudget, TimingMetric, Verdict,
};

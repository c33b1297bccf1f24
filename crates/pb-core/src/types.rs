//! Core type definitions for PageBudget
//!
//! Budget types are produced once by the validator in `pb-config` and are
//! read-only afterwards. Measurement types arrive from the page-load pipeline,
//! and result types are handed to the reporting layer.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

// =============================================================================
// Resource Types
// =============================================================================

/// Resource type a size or count budget can target.
///
/// `Total` and `ThirdParty` are aggregates; the remaining seven are the
/// content-type buckets every network record is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ResourceType {
    Total,
    Document,
    Script,
    Stylesheet,
    Image,
    Media,
    Font,
    Other,
    ThirdParty,
}

impl ResourceType {
    /// Every accepted resource type, in declaration order.
    pub const ALL: [ResourceType; 9] = [
        Self::Total,
        Self::Document,
        Self::Script,
        Self::Stylesheet,
        Self::Image,
        Self::Media,
        Self::Font,
        Self::Other,
        Self::ThirdParty,
    ];

    /// The content-type buckets a single record can land in.
    pub const BUCKETS: [ResourceType; 7] = [
        Self::Document,
        Self::Script,
        Self::Stylesheet,
        Self::Image,
        Self::Media,
        Self::Font,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Document => "document",
            Self::Script => "script",
            Self::Stylesheet => "stylesheet",
            Self::Image => "image",
            Self::Media => "media",
            Self::Font => "font",
            Self::Other => "other",
            Self::ThirdParty => "third-party",
        }
    }

    /// Parse a configuration name. Only the hyphenated spelling is accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Total => "Total",
            Self::Document => "Document",
            Self::Script => "Script",
            Self::Stylesheet => "Stylesheet",
            Self::Image => "Image",
            Self::Media => "Media",
            Self::Font => "Font",
            Self::Other => "Other",
            Self::ThirdParty => "Third-party",
        }
    }

    /// Map the raw type reported by the measurement layer to a bucket.
    /// Anything unmapped, including a missing type, is `Other`.
    pub fn from_request_type(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Other;
        };
        match raw.to_ascii_lowercase().as_str() {
            "document" => Self::Document,
            "script" => Self::Script,
            "stylesheet" => Self::Stylesheet,
            "image" => Self::Image,
            "media" => Self::Media,
            "font" => Self::Font,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Timing Metrics
// =============================================================================

/// Timing metric a budget can target. Values are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum TimingMetric {
    FirstContentfulPaint,
    FirstCpuIdle,
    Interactive,
    FirstMeaningfulPaint,
    MaxPotentialFid,
    EstimatedInputLatency,
    TotalBlockingTime,
    SpeedIndex,
    LargestContentfulPaint,
}

impl TimingMetric {
    pub const ALL: [TimingMetric; 9] = [
        Self::FirstContentfulPaint,
        Self::FirstCpuIdle,
        Self::Interactive,
        Self::FirstMeaningfulPaint,
        Self::MaxPotentialFid,
        Self::EstimatedInputLatency,
        Self::TotalBlockingTime,
        Self::SpeedIndex,
        Self::LargestContentfulPaint,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstContentfulPaint => "first-contentful-paint",
            Self::FirstCpuIdle => "first-cpu-idle",
            Self::Interactive => "interactive",
            Self::FirstMeaningfulPaint => "first-meaningful-paint",
            Self::MaxPotentialFid => "max-potential-fid",
            Self::EstimatedInputLatency => "estimated-input-latency",
            Self::TotalBlockingTime => "total-blocking-time",
            Self::SpeedIndex => "speed-index",
            Self::LargestContentfulPaint => "largest-contentful-paint",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstContentfulPaint => "First Contentful Paint",
            Self::FirstCpuIdle => "First CPU Idle",
            Self::Interactive => "Time to Interactive",
            Self::FirstMeaningfulPaint => "First Meaningful Paint",
            Self::MaxPotentialFid => "Max Potential First Input Delay",
            Self::EstimatedInputLatency => "Estimated Input Latency",
            Self::TotalBlockingTime => "Total Blocking Time",
            Self::SpeedIndex => "Speed Index",
            Self::LargestContentfulPaint => "Largest Contentful Paint",
        }
    }
}

impl fmt::Display for TimingMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Budgets
// =============================================================================

/// A size (KB) or count threshold for one resource type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceBudget {
    pub resource_type: ResourceType,
    pub budget: f64,
}

/// A timing threshold (ms) with an optional overshoot window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingBudget {
    pub metric: TimingMetric,
    pub budget: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOptions {
    /// Hostnames treated as first-party. `*.` prefixes match a domain suffix.
    pub first_party_hostnames: Vec<String>,
}

/// One validated policy unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// robots.txt-style path pattern
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_sizes: Option<Vec<ResourceBudget>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_counts: Option<Vec<ResourceBudget>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timings: Option<Vec<TimingBudget>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BudgetOptions>,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            resource_sizes: None,
            resource_counts: None,
            timings: None,
            options: None,
        }
    }
}

impl Budget {
    /// Configured first-party hostnames, if the budget declares any.
    pub fn first_party_hostnames(&self) -> Option<&[String]> {
        self.options
            .as_ref()
            .map(|o| o.first_party_hostnames.as_slice())
            .filter(|hosts| !hosts.is_empty())
    }
}

/// Budgets in declaration order. Later entries override earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BudgetSet {
    budgets: Vec<Budget>,
}

impl BudgetSet {
    pub fn new(budgets: Vec<Budget>) -> Self {
        Self { budgets }
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Budget> {
        self.budgets.iter()
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }
}

// =============================================================================
// Measurements
// =============================================================================

/// One network request as reported by the measurement layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRecord {
    pub url: String,
    /// Raw type, e.g. "Script" or "Image"
    #[serde(default)]
    pub resource_type: Option<String>,
    /// Bytes on the wire
    #[serde(default, deserialize_with = "deserialize_transfer_size")]
    pub transfer_size: u64,
}

/// Backends report sizes as JSON numbers, sometimes fractional or negative
/// (e.g. -1 for unknown). Round to whole bytes and clamp at zero.
fn deserialize_transfer_size<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let size = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    Ok(if size > 0.0 { size.round() as u64 } else { 0 })
}

impl NetworkRecord {
    pub fn new(url: &str, resource_type: Option<&str>, transfer_size: u64) -> Self {
        Self {
            url: url.to_string(),
            resource_type: resource_type.map(str::to_string),
            transfer_size,
        }
    }
}

/// Everything measured for a single page load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageMeasurements {
    /// Main resource (requested page) URL
    pub url: String,
    #[serde(default)]
    pub records: Vec<NetworkRecord>,
    /// Milliseconds keyed by metric name
    #[serde(default)]
    pub timings: HashMap<String, f64>,
}

impl PageMeasurements {
    pub fn timing(&self, metric: TimingMetric) -> Option<f64> {
        self.timings.get(metric.as_str()).copied()
    }
}

// =============================================================================
// Results
// =============================================================================

/// Request count and transfer size for one bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ResourceStat {
    #[ts(type = "number")]
    pub count: u64,
    #[ts(type = "number")]
    pub size: u64,
}

impl ResourceStat {
    #[inline]
    pub fn add(&mut self, transfer_size: u64) {
        self.count += 1;
        self.size += transfer_size;
    }
}

/// Row of the resource summary table.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SummaryRow {
    pub resource_type: ResourceType,
    pub label: String,
    #[ts(type = "number")]
    pub request_count: u64,
    #[ts(type = "number")]
    pub transfer_size: u64,
}

/// Outcome of comparing one actual value to one budget entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Verdict {
    Pass,
    /// Timing only: over budget but inside the tolerance window
    Average,
    Fail,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Average => "average",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scored budget entry. Size rows carry bytes in both value fields.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoredRow {
    pub id: String,
    pub label: String,
    pub budget_value: f64,
    pub actual_value: f64,
    /// `actual_value - budget_value`; negative means under budget
    pub difference: f64,
    pub verdict: Verdict,
}

/// Everything the reporting layer needs for one page.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Evaluation {
    /// Path pattern of the governing budget
    pub path: String,
    pub resource_summary: Vec<SummaryRow>,
    pub third_party: ResourceStat,
    pub resource_sizes: Vec<ScoredRow>,
    pub resource_counts: Vec<ScoredRow>,
    pub timings: Vec<ScoredRow>,
    pub verdict: Verdict,
}

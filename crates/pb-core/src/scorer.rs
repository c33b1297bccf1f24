//! Scoring actual values against budget thresholds
//!
//! Size and count rows are pass/fail. Timing rows add an `Average` state for
//! values that overshoot the budget but stay inside its tolerance.

use crate::summary::{stat_for, ResourceSummary};
use crate::types::{ResourceBudget, ResourceStat, ScoredRow, TimingBudget, Verdict};

/// Size budgets are declared in KB and compared against bytes.
pub const BYTES_PER_KB: f64 = 1024.0;

/// Signed distance from the budget and the resulting verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub difference: f64,
    pub verdict: Verdict,
}

/// Unit of a resource budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceUnit {
    Kilobytes,
    Count,
}

impl ResourceUnit {
    /// Convert a declared budget into the unit actual values are measured in.
    pub fn budget_in_actual_units(self, budget: f64) -> f64 {
        match self {
            Self::Kilobytes => budget * BYTES_PER_KB,
            Self::Count => budget,
        }
    }

    fn actual(self, stat: ResourceStat) -> f64 {
        match self {
            Self::Kilobytes => stat.size as f64,
            Self::Count => stat.count as f64,
        }
    }
}

/// Score a size or count. For `Kilobytes` the actual value is in bytes.
pub fn score_resource(actual: f64, budget: f64, unit: ResourceUnit) -> Score {
    let budget = unit.budget_in_actual_units(budget);
    let verdict = if actual > budget { Verdict::Fail } else { Verdict::Pass };
    Score {
        difference: actual - budget,
        verdict,
    }
}

/// Three-way timing score. A missing tolerance is zero, which leaves no
/// room for `Average`.
pub fn score_timing(actual_ms: f64, budget_ms: f64, tolerance_ms: Option<f64>) -> Score {
    let tolerance = tolerance_ms.unwrap_or(0.0);
    let verdict = if actual_ms < budget_ms {
        Verdict::Pass
    } else if actual_ms < budget_ms + tolerance {
        Verdict::Average
    } else {
        Verdict::Fail
    };
    Score {
        difference: actual_ms - budget_ms,
        verdict,
    }
}

/// Worst verdict across rows; `Pass` when there are none.
pub fn rollup<'a>(rows: impl IntoIterator<Item = &'a ScoredRow>) -> Verdict {
    rows.into_iter()
        .map(|row| row.verdict)
        .max()
        .unwrap_or(Verdict::Pass)
}

/// Worst offenders first. Stable, so equal differences keep budget order.
pub fn sort_rows(rows: &mut [ScoredRow]) {
    rows.sort_by(|a, b| b.difference.total_cmp(&a.difference));
}

/// Score every entry of a `resourceSizes` or `resourceCounts` list.
pub fn score_resource_budgets(
    budgets: &[ResourceBudget],
    summary: &ResourceSummary,
    third_party: &ResourceStat,
    unit: ResourceUnit,
) -> Vec<ScoredRow> {
    let mut rows: Vec<ScoredRow> = budgets
        .iter()
        .map(|entry| {
            let actual = unit.actual(stat_for(summary, third_party, entry.resource_type));
            let score = score_resource(actual, entry.budget, unit);
            ScoredRow {
                id: entry.resource_type.as_str().to_string(),
                label: entry.resource_type.label().to_string(),
                budget_value: unit.budget_in_actual_units(entry.budget),
                actual_value: actual,
                difference: score.difference,
                verdict: score.verdict,
            }
        })
        .collect();
    sort_rows(&mut rows);
    rows
}

/// Score timing budgets. Metrics without a measurement produce no row.
pub fn score_timing_budgets(
    budgets: &[TimingBudget],
    measurement: impl Fn(&TimingBudget) -> Option<f64>,
) -> Vec<ScoredRow> {
    let mut rows: Vec<ScoredRow> = budgets
        .iter()
        .filter_map(|entry| {
            let actual = measurement(entry)?;
            let score = score_timing(actual, entry.budget, entry.tolerance);
            Some(ScoredRow {
                id: entry.metric.as_str().to_string(),
                label: entry.metric.label().to_string(),
                budget_value: entry.budget,
                actual_value: actual,
                difference: score.difference,
                verdict: score.verdict,
            })
        })
        .collect();
    sort_rows(&mut rows);
    rows
}

//! Page evaluation
//!
//! Runs selection, aggregation and scoring for one page. Each call is a pure
//! function of its inputs.

use crate::psl::List;
use crate::scorer::{rollup, score_resource_budgets, score_timing_budgets, ResourceUnit};
use crate::summary::{summarize, summary_rows, third_party_summary};
use crate::types::{Budget, BudgetSet, Evaluation, PageMeasurements};

/// Evaluate a page against the budget that governs it.
///
/// `suffixes` backs the root-domain fallback for budgets without first-party
/// hostnames. Returns `None` when no budget matches the page; that is not a
/// failure and nothing is scored.
pub fn evaluate(budgets: &BudgetSet, page: &PageMeasurements, suffixes: &List) -> Option<Evaluation> {
    let budget = budgets.select(&page.url)?;
    Some(evaluate_with_budget(budget, page, suffixes))
}

/// Evaluate a page against an already selected budget.
pub fn evaluate_with_budget(budget: &Budget, page: &PageMeasurements, suffixes: &List) -> Evaluation {
    let summary = summarize(&page.records);
    let third_party = third_party_summary(&page.records, Some(budget), &page.url, suffixes);

    let resource_sizes = score_resource_budgets(
        budget.resource_sizes.as_deref().unwrap_or_default(),
        &summary,
        &third_party,
        ResourceUnit::Kilobytes,
    );
    let resource_counts = score_resource_budgets(
        budget.resource_counts.as_deref().unwrap_or_default(),
        &summary,
        &third_party,
        ResourceUnit::Count,
    );
    let timings = score_timing_budgets(budget.timings.as_deref().unwrap_or_default(), |entry| {
        page.timing(entry.metric)
    });

    let verdict = rollup(resource_sizes.iter().chain(&resource_counts).chain(&timings));

    Evaluation {
        path: budget.path.clone(),
        resource_summary: summary_rows(&summary, &third_party),
        third_party,
        resource_sizes,
        resource_counts,
        timings,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::psl::test_suffix_list;
    use crate::types::{
        NetworkRecord, ResourceBudget, ResourceStat, ResourceType, TimingBudget, TimingMetric, Verdict,
    };

    fn page() -> PageMeasurements {
        PageMeasurements {
            url: "https://example.com/checkout/cart".to_string(),
            records: vec![
                NetworkRecord::new("https://example.com/checkout/cart", Some("Document"), 30_000),
                NetworkRecord::new("https://example.com/app.js", Some("Script"), 100_000),
                NetworkRecord::new("https://cdn.widgets.io/w.js", Some("Script"), 50_000),
                NetworkRecord::new("data:image/gif;base64,R0lG", Some("Image"), 40),
            ],
            timings: [("interactive".to_string(), 5200.0), ("first-contentful-paint".to_string(), 900.0)]
                .into_iter()
                .collect(),
        }
    }

    fn budgets() -> BudgetSet {
        BudgetSet::new(vec![
            Budget {
                path: "/".to_string(),
                resource_counts: Some(vec![ResourceBudget { resource_type: ResourceType::Total, budget: 1.0 }]),
                ..Budget::default()
            },
            Budget {
                path: "/checkout".to_string(),
                resource_sizes: Some(vec![
                    ResourceBudget { resource_type: ResourceType::Script, budget: 100.0 },
                    ResourceBudget { resource_type: ResourceType::Total, budget: 500.0 },
                ]),
                resource_counts: Some(vec![ResourceBudget { resource_type: ResourceType::ThirdParty, budget: 5.0 }]),
                timings: Some(vec![
                    TimingBudget { metric: TimingMetric::Interactive, budget: 5000.0, tolerance: Some(1000.0) },
                    TimingBudget { metric: TimingMetric::FirstContentfulPaint, budget: 2000.0, tolerance: None },
                    TimingBudget { metric: TimingMetric::SpeedIndex, budget: 3000.0, tolerance: None },
                ]),
                options: None,
            },
        ])
    }

    #[test]
    fn test_evaluate_uses_governing_budget() {
        let evaluation = evaluate(&budgets(), &page(), &test_suffix_list()).unwrap();
        assert_eq!(evaluation.path, "/checkout");
        assert_eq!(evaluation.third_party, ResourceStat { count: 1, size: 50_000 });

        // script: 150_000 bytes vs 102_400
        assert_eq!(evaluation.resource_sizes[0].id, "script");
        assert_eq!(evaluation.resource_sizes[0].verdict, Verdict::Fail);
        assert_eq!(evaluation.resource_sizes[1].verdict, Verdict::Pass);

        assert_eq!(evaluation.resource_counts.len(), 1);
        assert_eq!(evaluation.resource_counts[0].actual_value, 1.0);

        let timing_ids: Vec<&str> = evaluation.timings.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(timing_ids, vec!["interactive", "first-contentful-paint"]);
        assert_eq!(evaluation.timings[0].verdict, Verdict::Average);

        assert_eq!(evaluation.verdict, Verdict::Fail);
    }

    #[test]
    fn test_evaluate_summary_rows() {
        let evaluation = evaluate(&budgets(), &page(), &test_suffix_list()).unwrap();
        let total = &evaluation.resource_summary[0];
        assert_eq!(total.resource_type, ResourceType::Total);
        assert_eq!(total.request_count, 3);
        assert_eq!(total.transfer_size, 180_000);
        let last = evaluation.resource_summary.last().unwrap();
        assert_eq!(last.resource_type, ResourceType::ThirdParty);
    }

    #[test]
    fn test_evaluate_without_matching_budget() {
        let set = BudgetSet::new(vec![Budget {
            path: "/blog".to_string(),
            ..Budget::default()
        }]);
        assert!(evaluate(&set, &page(), &test_suffix_list()).is_none());
    }

    #[test]
    fn test_evaluate_empty_budget_passes() {
        let set = BudgetSet::new(vec![Budget::default()]);
        let evaluation = evaluate(&set, &page(), &test_suffix_list()).unwrap();
        assert!(evaluation.resource_sizes.is_empty());
        assert!(evaluation.timings.is_empty());
        assert_eq!(evaluation.verdict, Verdict::Pass);
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let set = budgets();
        let page = page();
        let suffixes = test_suffix_list();
        let first = serde_json::to_string(&evaluate(&set, &page, &suffixes)).unwrap();
        let second = serde_json::to_string(&evaluate(&set, &page, &suffixes)).unwrap();
        assert_eq!(first, second);
    }
}

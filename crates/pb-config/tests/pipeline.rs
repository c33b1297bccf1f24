use pb_config::{default_budgets, default_suffix_list, validate_str};
use pb_core::{evaluate, PageMeasurements, ResourceStat, ResourceType, Verdict};

const BUDGETS: &str = r#"[
  {
    "path": "/",
    "resourceCounts": [{ "resourceType": "total", "budget": 100 }]
  },
  {
    "path": "/checkout",
    "resourceSizes": [
      { "resourceType": "script", "budget": 0.05 },
      { "resourceType": "third-party", "budget": 1 }
    ],
    "resourceCounts": [{ "resourceType": "third-party", "budget": 1 }],
    "timings": [
      { "metric": "first-contentful-paint", "budget": 5000 },
      { "metric": "interactive", "budget": 5000, "tolerance": 1000 }
    ],
    "options": { "firstPartyHostnames": ["*.shop.example"] }
  }
]"#;

fn page(url: &str) -> PageMeasurements {
    let raw = serde_json::json!({
        "url": url,
        "records": [
            { "url": url, "resourceType": "Document", "transferSize": 30 },
            { "url": "https://static.shop.example/app.js", "resourceType": "Script", "transferSize": 10 },
            { "url": "https://cdn.other.net/lib.js", "resourceType": "Script", "transferSize": 50 },
            { "url": "https://img.other.net/hero.png", "resourceType": "Image", "transferSize": 70 },
            { "url": "data:image/png;base64,AAAA", "resourceType": "Image", "transferSize": 999 },
            { "url": "https://shop.example/favicon.ico", "transferSize": 5 }
        ],
        "timings": { "first-contentful-paint": 4000, "interactive": 5200 }
    });
    serde_json::from_value(raw).unwrap()
}

#[test]
fn test_checkout_page_evaluation() {
    let budgets = validate_str(BUDGETS).unwrap();
    let suffixes = default_suffix_list().unwrap();
    let evaluation = evaluate(&budgets, &page("https://shop.example/checkout/step1"), &suffixes).unwrap();

    assert_eq!(evaluation.path, "/checkout");
    assert_eq!(evaluation.third_party, ResourceStat { count: 2, size: 120 });

    let total = &evaluation.resource_summary[0];
    assert_eq!(total.resource_type, ResourceType::Total);
    assert_eq!((total.request_count, total.transfer_size), (4, 160));

    // third-party: 120 bytes vs 1024 passes, script: 60 bytes vs 51.2 fails
    let sizes: Vec<(&str, Verdict)> = evaluation.resource_sizes.iter().map(|r| (r.id.as_str(), r.verdict)).collect();
    assert_eq!(sizes, vec![("script", Verdict::Fail), ("third-party", Verdict::Pass)]);

    assert_eq!(evaluation.resource_counts[0].verdict, Verdict::Fail);
    assert_eq!(evaluation.resource_counts[0].difference, 1.0);

    let timings: Vec<(&str, Verdict)> = evaluation.timings.iter().map(|r| (r.id.as_str(), r.verdict)).collect();
    assert_eq!(
        timings,
        vec![("interactive", Verdict::Average), ("first-contentful-paint", Verdict::Pass)]
    );

    assert_eq!(evaluation.verdict, Verdict::Fail);
}

#[test]
fn test_global_budget_for_other_pages() {
    let budgets = validate_str(BUDGETS).unwrap();
    let suffixes = default_suffix_list().unwrap();
    let evaluation = evaluate(&budgets, &page("https://shop.example/about"), &suffixes).unwrap();

    assert_eq!(evaluation.path, "/");
    assert!(evaluation.resource_sizes.is_empty());
    assert!(evaluation.timings.is_empty());
    assert_eq!(evaluation.resource_counts[0].actual_value, 4.0);
    assert_eq!(evaluation.verdict, Verdict::Pass);
    // Origin fallback: only the other.net hosts differ from shop.example
    assert_eq!(evaluation.third_party.count, 2);
}

#[test]
fn test_no_applicable_budget_is_not_an_error() {
    let budgets = validate_str(r#"[{ "path": "/blog" }]"#).unwrap();
    let suffixes = default_suffix_list().unwrap();
    assert!(evaluate(&budgets, &page("https://shop.example/checkout"), &suffixes).is_none());
}

#[test]
fn test_default_budget_evaluates() {
    let budgets = default_budgets().unwrap();
    let suffixes = default_suffix_list().unwrap();
    let evaluation = evaluate(&budgets, &page("https://shop.example/"), &suffixes).unwrap();

    assert!(evaluation.resource_sizes.iter().all(|r| r.verdict == Verdict::Pass));
    assert!(evaluation.resource_counts.iter().all(|r| r.verdict == Verdict::Pass));
    // max-potential-fid is budgeted but not measured
    assert_eq!(evaluation.timings.len(), 2);
    assert_eq!(evaluation.timings[0].id, "first-contentful-paint");
    assert_eq!(evaluation.timings[0].verdict, Verdict::Fail);
    assert_eq!(evaluation.verdict, Verdict::Fail);
}

#[test]
fn test_origin_fallback_respects_public_suffixes() {
    let budgets = validate_str(r#"[{ "path": "/", "resourceCounts": [{ "resourceType": "third-party", "budget": 0 }] }]"#).unwrap();
    let suffixes = default_suffix_list().unwrap();
    let raw = serde_json::json!({
        "url": "https://alice.github.io/",
        "records": [
            { "url": "https://alice.github.io/", "resourceType": "Document", "transferSize": 30 },
            { "url": "https://mallory.github.io/track.js", "resourceType": "Script", "transferSize": 8 }
        ]
    });
    let page: PageMeasurements = serde_json::from_value(raw).unwrap();

    let evaluation = evaluate(&budgets, &page, &suffixes).unwrap();
    assert_eq!(evaluation.third_party, ResourceStat { count: 1, size: 8 });
    assert_eq!(evaluation.resource_counts[0].verdict, Verdict::Fail);
}

//! Resource classification and aggregation
//!
//! Two independent passes over the same records: [`summarize`] fills the
//! seven content-type buckets plus `total`, and [`third_party_summary`]
//! computes the cross-cutting third-party aggregate. Both skip the same
//! records so their numbers stay comparable.

use std::collections::BTreeMap;

use log::trace;

use crate::hostname::PartyClassifier;
use crate::psl::List;
use crate::types::{Budget, NetworkRecord, ResourceStat, ResourceType, SummaryRow};
use crate::url::{extract_host, is_data_url};

/// Per-type statistics keyed by bucket, always including `Total`.
pub type ResourceSummary = BTreeMap<ResourceType, ResourceStat>;

/// Classify one record, or `None` when it must not be counted.
///
/// Data URLs are already counted in their containing resource, and favicons
/// are requested by some measurement backends but not others.
pub fn classify(record: &NetworkRecord) -> Option<ResourceType> {
    if is_data_url(&record.url) {
        trace!("skipping data URL record");
        return None;
    }

    let resource_type = ResourceType::from_request_type(record.resource_type.as_deref());
    if resource_type == ResourceType::Other && record.url.ends_with("/favicon.ico") {
        trace!("skipping favicon {}", record.url);
        return None;
    }

    Some(resource_type)
}

/// Aggregate counts and transfer sizes per content type.
///
/// Buckets do not depend on party; see [`third_party_summary`].
pub fn summarize(records: &[NetworkRecord]) -> ResourceSummary {
    let mut summary: ResourceSummary = ResourceType::BUCKETS
        .into_iter()
        .chain([ResourceType::Total])
        .map(|t| (t, ResourceStat::default()))
        .collect();

    for record in records {
        let Some(resource_type) = classify(record) else {
            continue;
        };
        summary.entry(resource_type).or_default().add(record.transfer_size);
        summary.entry(ResourceType::Total).or_default().add(record.transfer_size);
    }

    summary
}

/// Aggregate every counted record whose host is not first-party.
pub fn third_party_summary(
    records: &[NetworkRecord],
    governing_budget: Option<&Budget>,
    main_resource_url: &str,
    suffixes: &List,
) -> ResourceStat {
    let classifier = PartyClassifier::new(governing_budget, main_resource_url, suffixes);
    let mut stat = ResourceStat::default();

    for record in records {
        if classify(record).is_none() {
            continue;
        }
        let Some(host) = extract_host(&record.url) else {
            continue;
        };
        if classifier.is_third_party(host) {
            stat.add(record.transfer_size);
        }
    }

    stat
}

/// Statistic for any resource type, including the third-party aggregate.
pub fn stat_for(
    summary: &ResourceSummary,
    third_party: &ResourceStat,
    resource_type: ResourceType,
) -> ResourceStat {
    match resource_type {
        ResourceType::ThirdParty => *third_party,
        other => summary.get(&other).copied().unwrap_or_default(),
    }
}

/// Display rows: `total` first, `third-party` last, everything else by
/// descending transfer size with ties kept in declaration order.
pub fn summary_rows(summary: &ResourceSummary, third_party: &ResourceStat) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = ResourceType::ALL
        .into_iter()
        .map(|t| {
            let stat = stat_for(summary, third_party, t);
            SummaryRow {
                resource_type: t,
                label: t.label().to_string(),
                request_count: stat.count,
                transfer_size: stat.size,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        display_rank(a.resource_type)
            .cmp(&display_rank(b.resource_type))
            .then_with(|| b.transfer_size.cmp(&a.transfer_size))
    });

    rows
}

fn display_rank(resource_type: ResourceType) -> u8 {
    match resource_type {
        ResourceType::Total => 0,
        ResourceType::ThirdParty => 2,
        _ => 1,
    }
}

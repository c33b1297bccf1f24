//! Budget file validation
//!
//! The only place untyped budget JSON becomes a [`BudgetSet`]. Validation
//! reads the input by reference and builds fresh values, so the caller's
//! document is never touched and later changes to it cannot reach the
//! validated budgets. Either every budget validates or an error is returned.

use std::collections::HashSet;
use std::hash::Hash;

use log::debug;
use serde_json::{Map, Value};

use pb_core::pattern::is_valid_pattern;
use pb_core::types::{
    Budget, BudgetOptions, BudgetSet, ResourceBudget, ResourceType, TimingBudget, TimingMetric,
};

use crate::error::ConfigError;

const BUDGET_KEYS: &[&str] = &["path", "resourceSizes", "resourceCounts", "timings", "options"];
const RESOURCE_BUDGET_KEYS: &[&str] = &["resourceType", "budget"];
const TIMING_BUDGET_KEYS: &[&str] = &["metric", "budget", "tolerance"];
const OPTION_KEYS: &[&str] = &["firstPartyHostnames"];

/// Parse budget JSON text and validate it.
pub fn validate_str(text: &str) -> Result<BudgetSet, ConfigError> {
    let raw: Value = serde_json::from_str(text)?;
    validate(&raw)
}

/// Validate an already parsed budget document.
pub fn validate(raw: &Value) -> Result<BudgetSet, ConfigError> {
    let Value::Array(entries) = raw else {
        return Err(ConfigError::NotAnArray);
    };

    let budgets = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(object) => validate_budget(object),
            _ => Err(ConfigError::BudgetNotObject { index }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("validated {} budget(s)", budgets.len());
    Ok(BudgetSet::new(budgets))
}

fn validate_budget(object: &Map<String, Value>) -> Result<Budget, ConfigError> {
    let unknown = unknown_keys(object, BUDGET_KEYS);
    if !unknown.is_empty() {
        return Err(ConfigError::UnsupportedProperty {
            keys: unknown,
            valid: "path, resourceSizes, resourceCounts, timings, options",
        });
    }

    let path = match object.get("path") {
        None => "/".to_string(),
        Some(Value::String(path)) if is_valid_pattern(path) => path.clone(),
        Some(Value::String(path)) => return Err(ConfigError::InvalidPath { path: path.clone() }),
        Some(other) => return Err(ConfigError::InvalidPath { path: other.to_string() }),
    };

    let resource_sizes = object
        .get("resourceSizes")
        .map(|value| validate_resource_budgets(value, "resourceSizes"))
        .transpose()?;
    let resource_counts = object
        .get("resourceCounts")
        .map(|value| validate_resource_budgets(value, "resourceCounts"))
        .transpose()?;
    let timings = object.get("timings").map(validate_timing_budgets).transpose()?;
    let options = object.get("options").map(validate_options).transpose()?;

    Ok(Budget {
        path,
        resource_sizes,
        resource_counts,
        timings,
        options,
    })
}

fn validate_resource_budgets(
    value: &Value,
    list: &'static str,
) -> Result<Vec<ResourceBudget>, ConfigError> {
    let entries = as_array(value, list)?;
    let budgets = entries
        .iter()
        .map(|entry| validate_resource_budget(as_object(entry, list)?))
        .collect::<Result<Vec<_>, _>>()?;

    ensure_unique(budgets.iter().map(|b| b.resource_type), list)?;
    Ok(budgets)
}

fn validate_resource_budget(object: &Map<String, Value>) -> Result<ResourceBudget, ConfigError> {
    let resource_type = match object.get("resourceType") {
        Some(Value::String(name)) => ResourceType::from_name(name),
        _ => None,
    }
    .ok_or_else(|| ConfigError::InvalidResourceType {
        value: display_value(object.get("resourceType")),
        valid: join_names(ResourceType::ALL.iter().map(|t| t.as_str())),
    })?;

    let budget = finite_number(object.get("budget"))
        .ok_or_else(|| ConfigError::InvalidBudget { value: display_value(object.get("budget")) })?;

    let unknown = unknown_keys(object, RESOURCE_BUDGET_KEYS);
    if !unknown.is_empty() {
        return Err(ConfigError::UnrecognizedProperties {
            kind: "Resource Budget",
            keys: unknown,
        });
    }

    Ok(ResourceBudget { resource_type, budget })
}

fn validate_timing_budgets(value: &Value) -> Result<Vec<TimingBudget>, ConfigError> {
    let entries = as_array(value, "timings")?;
    let budgets = entries
        .iter()
        .map(|entry| validate_timing_budget(as_object(entry, "timings")?))
        .collect::<Result<Vec<_>, _>>()?;

    ensure_unique(budgets.iter().map(|b| b.metric), "timings")?;
    Ok(budgets)
}

fn validate_timing_budget(object: &Map<String, Value>) -> Result<TimingBudget, ConfigError> {
    let metric = match object.get("metric") {
        Some(Value::String(name)) => TimingMetric::from_name(name),
        _ => None,
    }
    .ok_or_else(|| ConfigError::InvalidTimingMetric {
        value: display_value(object.get("metric")),
        valid: join_names(TimingMetric::ALL.iter().map(|m| m.as_str())),
    })?;

    let budget = finite_number(object.get("budget"))
        .ok_or_else(|| ConfigError::InvalidBudget { value: display_value(object.get("budget")) })?;

    let tolerance = match object.get("tolerance") {
        None => None,
        Some(value) => Some(finite_number(Some(value)).ok_or_else(|| {
            ConfigError::InvalidTolerance { value: value.to_string() }
        })?),
    };

    let unknown = unknown_keys(object, TIMING_BUDGET_KEYS);
    if !unknown.is_empty() {
        return Err(ConfigError::UnrecognizedProperties {
            kind: "Timing Budget",
            keys: unknown,
        });
    }

    Ok(TimingBudget { metric, budget, tolerance })
}

fn validate_options(value: &Value) -> Result<BudgetOptions, ConfigError> {
    let object = as_object(value, "options")?;

    let unknown = unknown_keys(object, OPTION_KEYS);
    if !unknown.is_empty() {
        return Err(ConfigError::UnrecognizedProperties {
            kind: "Budget.options",
            keys: unknown,
        });
    }

    let first_party_hostnames = match object.get("firstPartyHostnames") {
        None => Vec::new(),
        Some(value) => as_array(value, "firstPartyHostnames")?
            .iter()
            .map(|host| match host {
                Value::String(host) => validate_hostname(host).map(|()| host.clone()),
                other => Err(ConfigError::InvalidHostname { hostname: other.to_string() }),
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(BudgetOptions { first_party_hostnames })
}

/// A hostname may not carry a scheme, port or path, and a wildcard is only
/// allowed as a single leading `*.`.
fn validate_hostname(hostname: &str) -> Result<(), ConfigError> {
    let invalid = hostname.is_empty()
        || hostname.contains('/')
        || hostname.contains(':')
        || (hostname.contains('*') && (!hostname.starts_with("*.") || hostname.rfind('*') != Some(0)));

    if invalid {
        return Err(ConfigError::InvalidHostname { hostname: hostname.to_string() });
    }
    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

fn as_array<'a>(value: &'a Value, field: &'static str) -> Result<&'a Vec<Value>, ConfigError> {
    value.as_array().ok_or(ConfigError::WrongType { field, expected: "an array" })
}

fn as_object<'a>(
    value: &'a Value,
    field: &'static str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    value.as_object().ok_or(ConfigError::WrongType { field, expected: "an array of objects" })
}

fn finite_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|n| n.is_finite())
}

fn unknown_keys(object: &Map<String, Value>, allowed: &[&str]) -> String {
    let unknown: Vec<&str> = object
        .keys()
        .map(String::as_str)
        .filter(|key| !allowed.contains(key))
        .collect();
    unknown.join(", ")
}

fn ensure_unique<T>(items: impl Iterator<Item = T>, list: &'static str) -> Result<(), ConfigError>
where
    T: Eq + Hash + ToString,
{
    let mut seen = HashSet::new();
    for item in items {
        let value = item.to_string();
        if !seen.insert(item) {
            return Err(ConfigError::Duplicate { list, value });
        }
    }
    Ok(())
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

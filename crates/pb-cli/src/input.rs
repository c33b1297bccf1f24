use std::fs;
use std::path::Path;

use log::debug;

use pb_config::{default_budgets, default_suffix_list, validate_str};
use pb_core::types::{BudgetSet, PageMeasurements};
use pb_core::SuffixList;

/// Load and validate a budget file, or the bundled default when no path is
/// given.
pub fn load_budgets(path: Option<&Path>) -> Result<BudgetSet, String> {
    match path {
        Some(path) => {
            let text = read_text(path)?;
            validate_str(&text).map_err(|e| format!("Invalid budget file '{}': {}", path.display(), e))
        }
        None => {
            debug!("no budget file given, using bundled default");
            default_budgets().map_err(|e| format!("Invalid default budget: {}", e))
        }
    }
}

/// Load the measurements of one page load.
pub fn load_page(path: &Path) -> Result<PageMeasurements, String> {
    let text = read_text(path)?;
    let page: PageMeasurements = serde_json::from_str(&text)
        .map_err(|e| format!("Invalid page file '{}': {}", path.display(), e))?;
    debug!("loaded {} record(s) for {}", page.records.len(), page.url);
    Ok(page)
}

/// Parse the bundled Public Suffix List.
pub fn load_suffixes() -> Result<SuffixList, String> {
    default_suffix_list().map_err(|e| e.to_string())
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize output: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn read_text(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path.display(), e))
}

//! WebAssembly bindings for PageBudget
//!
//! Every call validates the budget JSON it is given, so the reporting layer
//! can evaluate pages against different budget files. Only the parsed Public
//! Suffix List is kept between calls.

use std::sync::OnceLock;

use wasm_bindgen::prelude::*;

use pb_config::{default_budgets, default_suffix_list, validate_str};
use pb_core::report::evaluate;
use pb_core::types::{BudgetSet, PageMeasurements};
use pb_core::SuffixList;

static SUFFIXES: OnceLock<SuffixList> = OnceLock::new();

fn suffixes() -> Result<&'static SuffixList, JsValue> {
    if let Some(list) = SUFFIXES.get() {
        return Ok(list);
    }
    let list = default_suffix_list().map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(SUFFIXES.get_or_init(|| list))
}

fn load_budgets(budgets_json: Option<String>) -> Result<BudgetSet, JsValue> {
    let budgets = match budgets_json {
        Some(text) => validate_str(&text),
        None => default_budgets(),
    };
    budgets.map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate budget JSON. Returns `{ count, paths }` or throws the validation
/// message.
#[wasm_bindgen]
pub fn validate_budgets(budgets_json: &str) -> Result<JsValue, JsValue> {
    let budgets = load_budgets(Some(budgets_json.to_string()))?;

    let paths = js_sys::Array::new();
    for budget in budgets.iter() {
        paths.push(&JsValue::from_str(&budget.path));
    }

    let result = js_sys::Object::new();
    js_sys::Reflect::set(&result, &"count".into(), &JsValue::from(budgets.len() as u32))?;
    js_sys::Reflect::set(&result, &"paths".into(), &paths)?;
    Ok(result.into())
}

/// Evaluate page measurements JSON against budget JSON (or the bundled
/// default when `budgets_json` is undefined).
///
/// Returns the evaluation as a JSON string, or `"null"` when no budget
/// applies to the page.
#[wasm_bindgen]
pub fn evaluate_page(budgets_json: Option<String>, page_json: &str) -> Result<String, JsValue> {
    let budgets = load_budgets(budgets_json)?;
    let page: PageMeasurements = serde_json::from_str(page_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid page measurements: {}", e)))?;

    serde_json::to_string(&evaluate(&budgets, &page, suffixes()?))
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize evaluation: {}", e)))
}

/// The bundled default budget document.
#[wasm_bindgen]
pub fn default_budget_json() -> String {
    pb_config::DEFAULT_BUDGET_JSON.to_string()
}

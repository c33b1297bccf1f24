//! Bundled default budget
//!
//! Used by callers that have no budget file of their own. It is passed
//! through the validator like any user document.

use pb_core::types::BudgetSet;

use crate::error::ConfigError;
use crate::validator::validate_str;

/// One catch-all budget with conventional mobile thresholds.
pub const DEFAULT_BUDGET_JSON: &str = r#"[
  {
    "path": "/",
    "resourceSizes": [
      { "resourceType": "total", "budget": 1600 },
      { "resourceType": "script", "budget": 300 },
      { "resourceType": "stylesheet", "budget": 100 },
      { "resourceType": "image", "budget": 800 },
      { "resourceType": "font", "budget": 100 },
      { "resourceType": "third-party", "budget": 400 }
    ],
    "resourceCounts": [
      { "resourceType": "total", "budget": 75 },
      { "resourceType": "third-party", "budget": 20 }
    ],
    "timings": [
      { "metric": "first-contentful-paint", "budget": 2000, "tolerance": 500 },
      { "metric": "interactive", "budget": 5000, "tolerance": 1000 },
      { "metric": "max-potential-fid", "budget": 130, "tolerance": 120 }
    ]
  }
]"#;

/// Validate the bundled default budget.
pub fn default_budgets() -> Result<BudgetSet, ConfigError> {
    validate_str(DEFAULT_BUDGET_JSON)
}

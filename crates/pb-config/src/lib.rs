//! PageBudget Budget File Validation
//!
//! This crate turns budget JSON into a validated [`pb_core::BudgetSet`] and
//! bundles the Public Suffix List used by the root-domain fallback.

pub mod defaults;
pub mod error;
pub mod suffixes;
pub mod validator;

pub use defaults::{default_budgets, DEFAULT_BUDGET_JSON};
pub use error::ConfigError;
pub use suffixes::{default_suffix_list, load_suffix_list, PUBLIC_SUFFIX_LIST};
pub use validator::{validate, validate_str};

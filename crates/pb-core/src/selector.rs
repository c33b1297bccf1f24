//! Governing budget selection

use log::debug;

use crate::pattern::matches;
use crate::types::{Budget, BudgetSet};
use crate::url::extract_path_and_query;

/// Pick the budget that governs `page_url`.
///
/// Every budget whose path matches is a candidate and the last one declared
/// wins, so a catch-all `/` budget can be listed first and refined later.
pub fn select_budget<'a>(budgets: &'a [Budget], page_url: &str) -> Option<&'a Budget> {
    let url_path = extract_path_and_query(page_url);
    let selected = budgets
        .iter()
        .filter(|budget| matches(&url_path, &budget.path))
        .last();

    match selected {
        Some(budget) => debug!("budget '{}' governs {}", budget.path, page_url),
        None => debug!("no budget matches {}", page_url),
    }

    selected
}

impl BudgetSet {
    pub fn select(&self, page_url: &str) -> Option<&Budget> {
        select_budget(self.budgets(), page_url)
    }
}

use std::path::PathBuf;

use pb_core::report::evaluate;
use pb_core::summary::{summarize, summary_rows, third_party_summary};
use pb_core::types::{Evaluation, ScoredRow, Verdict};

use crate::input::{load_budgets, load_page, load_suffixes, print_json};

pub struct CheckOptions {
    pub page_path: PathBuf,
    pub budgets_path: Option<PathBuf>,
    pub fail_on_breach: bool,
}

/// Evaluate one page and print the result as JSON.
pub fn run_check(opts: CheckOptions) -> Result<(), String> {
    let budgets = load_budgets(opts.budgets_path.as_deref())?;
    let page = load_page(&opts.page_path)?;
    let suffixes = load_suffixes()?;

    let Some(evaluation) = evaluate(&budgets, &page, &suffixes) else {
        eprintln!("No budget applies to {}", page.url);
        print_json(&serde_json::Value::Null)?;
        return Ok(());
    };

    report_evaluation(&evaluation);
    print_json(&evaluation)?;

    if opts.fail_on_breach && evaluation.verdict == Verdict::Fail {
        return Err(format!("Performance budget exceeded for {}", page.url));
    }
    Ok(())
}

/// Print the resource summary table for a page, with or without a
/// governing budget.
pub fn run_summary(page_path: PathBuf, budgets_path: Option<PathBuf>) -> Result<(), String> {
    let budgets = load_budgets(budgets_path.as_deref())?;
    let page = load_page(&page_path)?;
    let suffixes = load_suffixes()?;
    let budget = budgets.select(&page.url);

    let summary = summarize(&page.records);
    let third_party = third_party_summary(&page.records, budget, &page.url, &suffixes);
    print_json(&summary_rows(&summary, &third_party))
}

fn report_evaluation(evaluation: &Evaluation) {
    eprintln!("Budget: {}", evaluation.path);
    eprintln!("--------------------------------------------------");
    for row in &evaluation.resource_sizes {
        report_row("size", row);
    }
    for row in &evaluation.resource_counts {
        report_row("count", row);
    }
    for row in &evaluation.timings {
        report_row("timing", row);
    }
    eprintln!("--------------------------------------------------");
    eprintln!("Overall: {}", evaluation.verdict);
}

fn report_row(kind: &str, row: &ScoredRow) {
    let status = match row.verdict {
        Verdict::Pass => "✓",
        Verdict::Average => "~",
        Verdict::Fail => "✗",
    };
    eprintln!(
        "{} {} {}: {:.0} (budget: {:.0}, difference: {:+.0})",
        status, kind, row.label, row.actual_value, row.budget_value, row.difference
    );
}

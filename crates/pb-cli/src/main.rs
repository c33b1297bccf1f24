//! PageBudget CLI
//!
//! CLI tool for validating budget files and scoring measured pages.

mod check;
mod input;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pb_config::DEFAULT_BUDGET_JSON;

use crate::check::{run_check, run_summary, CheckOptions};
use crate::input::{load_budgets, print_json};

#[derive(Parser)]
#[command(name = "pb-cli")]
#[command(about = "PageBudget performance budget checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a budget file
    Validate {
        /// Budget JSON file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Score a measured page against its governing budget
    Check {
        /// Page measurements JSON file
        #[arg(short, long)]
        page: PathBuf,

        /// Budget JSON file (bundled default when omitted)
        #[arg(short, long)]
        budgets: Option<PathBuf>,

        /// Exit with an error when any budget fails
        #[arg(long)]
        fail_on_breach: bool,
    },

    /// Print the per-resource-type summary of a measured page
    Summary {
        /// Page measurements JSON file
        #[arg(short, long)]
        page: PathBuf,

        /// Budget JSON file, used for first-party hostnames
        #[arg(short, long)]
        budgets: Option<PathBuf>,
    },

    /// Print the bundled default budget
    Defaults,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { input } => cmd_validate(input),
        Commands::Check {
            page,
            budgets,
            fail_on_breach,
        } => run_check(CheckOptions {
            page_path: page,
            budgets_path: budgets,
            fail_on_breach,
        }),
        Commands::Summary { page, budgets } => run_summary(page, budgets),
        Commands::Defaults => {
            println!("{}", DEFAULT_BUDGET_JSON);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_validate(input: PathBuf) -> Result<(), String> {
    let budgets = load_budgets(Some(input.as_path()))?;

    eprintln!("Budget file '{}' is valid", input.display());
    eprintln!("  Budgets:     {}", budgets.len());
    for budget in budgets.iter() {
        eprintln!(
            "  {:<12} sizes: {}, counts: {}, timings: {}",
            budget.path,
            budget.resource_sizes.as_ref().map_or(0, Vec::len),
            budget.resource_counts.as_ref().map_or(0, Vec::len),
            budget.timings.as_ref().map_or(0, Vec::len),
        );
    }

    print_json(&budgets)
}

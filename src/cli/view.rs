//! View command
//!
//! Loads a month or a whole year of entries and prints the expense report.

use clap::Args;
use tracing::warn;

use crate::config::Taxonomy;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Period;
use crate::reports::{ExpenseReport, ReportScope};
use crate::storage::Ledger;

/// Arguments for `view`
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    /// Year to report on
    #[arg(short, long)]
    pub year: i32,

    /// Month to report on (1-12); the whole year when omitted
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Only show this category, broken down by subcategory
    #[arg(short = 't', long = "type", value_name = "CATEGORY")]
    pub category: Option<String>,
}

/// Load entries for the requested scope and build the report
pub fn build_view_report(ledger: &Ledger, args: &ViewArgs) -> LedgerResult<ExpenseReport> {
    let period = args
        .month
        .map(|month| Period::new(args.year, month))
        .transpose()
        .map_err(|e| LedgerError::Validation(e.to_string()))?;

    let entries = ledger.read_all(args.year, args.month)?;
    let scope = ReportScope::from_parts(args.year, period);

    Ok(ExpenseReport::generate(
        entries,
        scope,
        args.category.as_deref(),
    ))
}

/// Handle the view command
pub fn handle_view_command(
    ledger: &Ledger,
    taxonomy: &Taxonomy,
    args: ViewArgs,
) -> LedgerResult<()> {
    if let Some(category) = &args.category {
        if !taxonomy.contains(category) {
            warn!(%category, "category is not in the current configuration");
        }
    }

    let report = build_view_report(ledger, &args)?;
    print!("{}", report.format_terminal());
    Ok(())
}

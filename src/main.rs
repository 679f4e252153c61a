use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use expense_ledger::cli::{
    handle_add_command, handle_categories_command, handle_view_command, AddArgs, ViewArgs,
};
use expense_ledger::config::{LedgerPaths, Taxonomy};
use expense_ledger::logging::init_tracing;
use expense_ledger::storage::Ledger;

/// Exit status for a missing subcommand, matching clap's usage errors
const USAGE_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal expense tracker with monthly CSV ledgers",
    long_about = "Records dated expense and income entries into one CSV file per month, \
                  grouped by a small taxonomy of categories and subcategories, and \
                  reports totals as tables and text bar charts."
)]
struct Cli {
    /// Directory holding settings.conf and the expenses/ ledger files
    #[arg(long, global = true, env = "LEDGER_DATA_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively add entries to a month's ledger
    Add(AddArgs),

    /// Show entries, totals and a bar chart for a month or year
    View(ViewArgs),

    /// List the configured categories and subcategories
    #[command(alias = "types")]
    Categories,

    /// Show where configuration and ledger files are stored
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::from(USAGE_EXIT_CODE));
    };

    init_tracing();

    let paths = LedgerPaths::new(cli.data_dir)?;

    match command {
        Commands::Add(args) => {
            let (taxonomy, ledger) = open_ledger(paths)?;
            handle_add_command(&taxonomy, &ledger, args)?;
        }
        Commands::View(args) => {
            let (taxonomy, ledger) = open_ledger(paths)?;
            handle_view_command(&ledger, &taxonomy, args)?;
        }
        Commands::Categories => {
            let taxonomy = Taxonomy::load_or_create(&paths)?;
            handle_categories_command(&taxonomy)?;
        }
        Commands::Config => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Categories file:  {}", paths.settings_file().display());
            println!("Ledger directory: {}", paths.expenses_dir().display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Load the taxonomy (writing the default on first run) and open the ledger
fn open_ledger(paths: LedgerPaths) -> Result<(Taxonomy, Ledger)> {
    let taxonomy = Taxonomy::load_or_create(&paths)?;
    Ok((taxonomy, Ledger::new(paths)))
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use expense_tracker::cli::{
    handle_budget_command, handle_category_command, handle_chart_command,
    handle_dashboard_command, handle_expense_command, handle_export_command, print_warnings,
    BudgetCommands, CategoryCommands, ChartArgs, ExpenseCommands, ExportArgs, FilterArgs,
};
use expense_tracker::config::{paths::DATA_DIR_ENV, Settings, TrackerPaths};
use expense_tracker::logging::init_tracing;
use expense_tracker::services::{Clock, SystemClock, Tracker};
use expense_tracker::storage::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense tracker",
    long_about = "Record expenses against categories, set overall and per-category \
                  budgets, and see where the money goes from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show totals, budget status and spending by category
    Dashboard {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show spending by category as a bar chart
    Chart(ChartArgs),

    /// Export data as CSV, JSON or YAML
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Expense Tracker - personal expense tracking");
        println!();
        println!("Run 'expense --help' for usage information.");
        return Ok(());
    };

    if let Commands::Config = command {
        print_config(&paths, &settings);
        return Ok(());
    }

    paths.ensure_directories()?;
    let store = JsonFileStore::new(paths.data_dir());
    let mut tracker =
        Tracker::load(store)?.with_warning_percent(settings.budget_warning_percent);
    print_warnings(tracker.startup_warnings());

    let clock = SystemClock;
    debug!(base_dir = %paths.base_dir().display(), "running command");

    match command {
        Commands::Expense(cmd) => {
            handle_expense_command(&mut tracker, &settings, clock.today(), cmd)?;
        }
        Commands::Category(cmd) => {
            handle_category_command(&mut tracker, cmd)?;
        }
        Commands::Budget(cmd) => {
            handle_budget_command(&mut tracker, &settings, cmd)?;
        }
        Commands::Dashboard { filter } => {
            handle_dashboard_command(&mut tracker, &settings, filter)?;
        }
        Commands::Chart(args) => {
            handle_chart_command(&mut tracker, &settings, args)?;
        }
        Commands::Export(args) => {
            handle_export_command(tracker.state(), clock.now(), args)?;
        }
        Commands::Config => {}
    }

    Ok(())
}

fn print_config(paths: &TrackerPaths, settings: &Settings) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("(override with {})", DATA_DIR_ENV);
    println!();
    println!("Settings:");
    println!("  Currency symbol:        {}", settings.currency_symbol);
    println!("  Date format:            {}", settings.date_format);
    println!("  Budget warning percent: {}", settings.budget_warning_percent);
}

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the tracker.

pub mod budget;
pub mod category;
pub mod expense;
pub mod export;
pub mod report;

use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::error::{TrackerError, TrackerResult};
use crate::models::ExpenseFilter;
use crate::services::Tracker;
use crate::storage::KeyValueStore;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_chart_command, handle_dashboard_command, ChartArgs};

/// Date range and category restriction shared by list and report commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Category name or ID
    #[arg(short, long)]
    pub category: Option<String>,
}

impl FilterArgs {
    /// Resolve the arguments against the tracker's categories
    pub fn to_filter<S: KeyValueStore>(&self, tracker: &Tracker<S>) -> TrackerResult<ExpenseFilter> {
        let category = match &self.category {
            Some(identifier) => Some(
                tracker
                    .state()
                    .find_category(identifier)
                    .map(|c| c.id.clone())
                    .ok_or_else(|| TrackerError::category_not_found(identifier.as_str()))?,
            ),
            None => None,
        };

        Ok(ExpenseFilter::between(self.start, self.end).with_category(category))
    }

    /// Apply to the tracker's active filter
    pub fn apply<S: KeyValueStore>(&self, tracker: &mut Tracker<S>) -> TrackerResult<()> {
        let filter = self.to_filter(tracker)?;
        tracker.set_filter(filter);
        Ok(())
    }
}

/// Ask before a destructive change unless `assume_yes` is set
pub fn confirm(prompt: &str, assume_yes: bool) -> TrackerResult<bool> {
    if assume_yes {
        return Ok(true);
    }

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| TrackerError::Io(format!("Failed to read confirmation: {}", e)))
}

/// Print non-fatal warnings from a command to stderr
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
}

//! Expense CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use super::{confirm, print_warnings, FilterArgs};
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{TrackerError, TrackerResult};
use crate::models::ExpenseId;
use crate::reports::category_label;
use crate::services::{ExpenseInput, Tracker};
use crate::storage::KeyValueStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "120" or "120.50")
        amount: String,
        /// What the money was spent on
        description: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Date of the expense (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List expenses
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Only show rows whose description, category, amount or date contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let outcome = tracker.add_expense(ExpenseInput {
                amount,
                description,
                category,
                date: date.unwrap_or(today),
            })?;
            let (category_name, _) =
                category_label(tracker.categories(), outcome.value.category.as_ref());

            println!("Added expense:");
            print!(
                "{}",
                format_expense_details(&outcome.value, &category_name, symbol)
            );
            print_warnings(&outcome.warnings);
        }

        ExpenseCommands::List { filter, search } => {
            filter.apply(tracker)?;
            let rows = tracker.expense_rows(search.as_deref());
            print!(
                "{}",
                format_expense_table(&rows, symbol, &settings.date_format)
            );
        }

        ExpenseCommands::Edit {
            id,
            amount,
            description,
            category,
            date,
        } => {
            let id = ExpenseId::new(id);
            let current = tracker
                .state()
                .expense(&id)
                .ok_or_else(|| TrackerError::expense_not_found(id.as_str()))?;

            // Unchanged fields keep their stored values
            let input = ExpenseInput {
                amount: amount.unwrap_or_else(|| current.amount.to_string()),
                description: description.unwrap_or_else(|| current.description.clone()),
                category: category
                    .or_else(|| current.category.as_ref().map(|c| c.to_string()))
                    .unwrap_or_default(),
                date: date.unwrap_or(current.date),
            };

            let outcome = tracker.update_expense(&id, input)?;
            let (category_name, _) =
                category_label(tracker.categories(), outcome.value.category.as_ref());

            println!("Updated expense:");
            print!(
                "{}",
                format_expense_details(&outcome.value, &category_name, symbol)
            );
            print_warnings(&outcome.warnings);
        }

        ExpenseCommands::Delete { id, yes } => {
            let id = ExpenseId::new(id);
            let current = tracker
                .state()
                .expense(&id)
                .ok_or_else(|| TrackerError::expense_not_found(id.as_str()))?;

            let prompt = format!(
                "Delete expense '{}' ({})?",
                current.description,
                current.amount.format_with_symbol(symbol)
            );
            if !confirm(&prompt, yes)? {
                println!("Cancelled.");
                return Ok(());
            }

            let outcome = tracker.delete_expense(&id)?;
            println!("Deleted expense: {}", outcome.value.description);
            print_warnings(&outcome.warnings);
        }
    }

    Ok(())
}

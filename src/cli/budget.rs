//! Budget CLI commands

use clap::Subcommand;

use super::{confirm, print_warnings};
use crate::config::Settings;
use crate::display::format_budget_list;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{budget_id, BudgetPeriod, BudgetType, OVERALL_BUDGET_ID};
use crate::services::{BudgetInput, Tracker};
use crate::storage::KeyValueStore;

fn parse_period(s: &str) -> Result<BudgetPeriod, String> {
    BudgetPeriod::parse(s).ok_or_else(|| format!("unknown period '{}' (weekly, monthly, yearly)", s))
}

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the overall budget, or a category budget with --category
    Set {
        /// Budget amount (e.g., "1000" or "1000.00")
        amount: String,
        /// Category name or ID (omit for the overall budget)
        #[arg(short, long)]
        category: Option<String>,
        /// Budget period: weekly, monthly or yearly
        #[arg(short, long, default_value = "monthly", value_parser = parse_period)]
        period: BudgetPeriod,
    },

    /// Show all budgets with their progress
    List,

    /// Delete a budget
    Delete {
        /// "overall", a budget ID, or a category name or ID
        target: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set {
            amount,
            category,
            period,
        } => {
            let input = match category {
                Some(category) => BudgetInput::category(category, amount),
                None => BudgetInput::overall(amount),
            }
            .with_period(period);

            let outcome = tracker.set_budget(input)?;
            let budget = &outcome.value;
            let title = tracker
                .budget_rows()
                .into_iter()
                .find(|row| row.id == budget.id)
                .map(|row| row.title)
                .unwrap_or_else(|| budget.id.clone());

            println!(
                "Set {} budget for {}: {}",
                budget.period,
                title,
                budget.amount.format_with_symbol(symbol)
            );
            print_warnings(&outcome.warnings);
        }

        BudgetCommands::List => {
            print!("{}", format_budget_list(&tracker.budget_rows(), symbol));
        }

        BudgetCommands::Delete { target, yes } => {
            let id = resolve_budget_id(tracker, &target)?;

            if !confirm(&format!("Delete budget '{}'?", id), yes)? {
                println!("Cancelled.");
                return Ok(());
            }

            let outcome = tracker.delete_budget(&id)?;
            println!("Deleted budget: {}", outcome.value.id);
            print_warnings(&outcome.warnings);
        }
    }

    Ok(())
}

/// Map a user-supplied target to a budget id
fn resolve_budget_id<S: KeyValueStore>(tracker: &Tracker<S>, target: &str) -> TrackerResult<String> {
    let target = target.trim();
    if target.eq_ignore_ascii_case(OVERALL_BUDGET_ID) {
        return Ok(OVERALL_BUDGET_ID.to_string());
    }
    if tracker.state().budget(target).is_some() {
        return Ok(target.to_string());
    }

    tracker
        .state()
        .find_category(target)
        .map(|c| budget_id(BudgetType::Category, Some(&c.id)))
        .ok_or_else(|| TrackerError::budget_not_found(target))
}

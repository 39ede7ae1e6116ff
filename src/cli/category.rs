//! Category CLI commands

use clap::Subcommand;

use super::{confirm, print_warnings};
use crate::display::{format_category_details, format_category_list};
use crate::error::{TrackerError, TrackerResult};
use crate::services::{CategoryInput, Tracker};
use crate::storage::KeyValueStore;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Display color (#rrggbb)
        #[arg(long)]
        color: Option<String>,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New color (#rrggbb)
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a category (its expenses become uncategorized)
    Delete {
        /// Category name or ID
        category: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a category command
pub fn handle_category_command<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    cmd: CategoryCommands,
) -> TrackerResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(tracker.categories()));
        }

        CategoryCommands::Add { name, color } => {
            let outcome = tracker.add_category(CategoryInput { name, color })?;
            println!("Created category:");
            print!("{}", format_category_details(&outcome.value));
            print_warnings(&outcome.warnings);
        }

        CategoryCommands::Edit {
            category,
            name,
            color,
        } => {
            let current = tracker
                .state()
                .find_category(&category)
                .ok_or_else(|| TrackerError::category_not_found(category.as_str()))?;
            let id = current.id.clone();
            let name = name.unwrap_or_else(|| current.name.clone());

            let outcome = tracker.update_category(&id, CategoryInput { name, color })?;
            println!("Updated category:");
            print!("{}", format_category_details(&outcome.value));
            print_warnings(&outcome.warnings);
        }

        CategoryCommands::Delete { category, yes } => {
            let current = tracker
                .state()
                .find_category(&category)
                .ok_or_else(|| TrackerError::category_not_found(category.as_str()))?;
            let id = current.id.clone();
            let in_use = tracker
                .expenses()
                .iter()
                .filter(|e| e.is_in_category(&id))
                .count();

            let prompt = format!(
                "Delete category '{}'? {} expense(s) will become uncategorized.",
                current.name, in_use
            );
            if !confirm(&prompt, yes)? {
                println!("Cancelled.");
                return Ok(());
            }

            let outcome = tracker.delete_category(&id)?;
            println!("Deleted category: {}", outcome.value.category.name);
            if outcome.value.cleared_expenses > 0 {
                println!(
                    "  {} expense(s) are now uncategorized",
                    outcome.value.cleared_expenses
                );
            }
            print_warnings(&outcome.warnings);
        }
    }

    Ok(())
}

//! Display formatting for terminal output
//!
//! Turns the view-models from `reports` into plain text for the CLI.

pub mod budget;
pub mod category;
pub mod dashboard;
pub mod expense;
pub mod report;

pub use budget::format_budget_list;
pub use category::{format_category_details, format_category_list};
pub use dashboard::{format_chart, format_dashboard};
pub use expense::{format_expense_details, format_expense_table};

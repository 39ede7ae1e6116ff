//! Expense display formatting
//!
//! Renders the expense list as a register-style table.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::Expense;
use crate::reports::ExpenseRow;

use super::report::truncate;

/// Render a date, falling back to ISO form when the format cannot be applied
fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(date_format)) {
        Ok(()) => out,
        Err(_) => date.to_string(),
    }
}

/// Format a single expense row
pub fn format_expense_row(row: &ExpenseRow, currency_symbol: &str, date_format: &str) -> String {
    format!(
        "{:10}  {:24}  {:14}  {:>12}  {}",
        format_date(row.date, date_format),
        truncate(&row.description, 24),
        truncate(&row.category_name, 14),
        row.amount.format_with_symbol(currency_symbol),
        row.id
    )
}

/// Format the expense list with a total line
pub fn format_expense_table(rows: &[ExpenseRow], currency_symbol: &str, date_format: &str) -> String {
    if rows.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10}  {:24}  {:14}  {:>12}  {}\n",
        "Date", "Description", "Category", "Amount", "ID"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for row in rows {
        output.push_str(&format_expense_row(row, currency_symbol, date_format));
        output.push('\n');
    }

    let total: crate::models::Money = rows.iter().map(|r| r.amount).sum();
    output.push_str(&"-".repeat(70));
    output.push('\n');
    output.push_str(&format!(
        "{:10}  {:24}  {:14}  {:>12}\n",
        "",
        format!("{} expense(s)", rows.len()),
        "Total",
        total.format_with_symbol(currency_symbol)
    ));

    output
}

/// Format expense details after a command
pub fn format_expense_details(expense: &Expense, category_name: &str, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.description));
    output.push_str(&format!("  ID:       {}\n", expense.id));
    output.push_str(&format!(
        "  Amount:   {}\n",
        expense.amount.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("  Category: {}\n", category_name));
    output.push_str(&format!("  Date:     {}\n", expense.date));
    output.push_str(&format!(
        "  Created:  {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

//! Budget display formatting

use crate::reports::{BudgetLevel, BudgetRow};

use super::report::{format_bar, format_percentage, truncate};

const BAR_WIDTH: usize = 20;

fn level_marker(level: BudgetLevel) -> &'static str {
    match level {
        BudgetLevel::Ok => "",
        BudgetLevel::Warning => " ⚠",
        BudgetLevel::Over => " OVER",
    }
}

/// Format one budget with its progress bar
pub fn format_budget_row(row: &BudgetRow, currency_symbol: &str) -> String {
    format!(
        "{:18} {:8} {} {:>6}  {} of {} ({} left){}",
        truncate(&row.title, 18),
        row.period.to_string(),
        format_bar(row.progress, 100.0, BAR_WIDTH),
        format_percentage(row.status.percentage),
        row.status.spent.format_with_symbol(currency_symbol),
        row.status.budget.format_with_symbol(currency_symbol),
        row.status.remaining.format_with_symbol(currency_symbol),
        level_marker(row.level)
    )
}

/// Format the budget list
pub fn format_budget_list(rows: &[BudgetRow], currency_symbol: &str) -> String {
    if rows.is_empty() {
        return "No budgets set.\n\nRun 'expense budget set' to create one.\n".to_string();
    }

    let mut output = String::new();
    for row in rows {
        output.push_str(&format_budget_row(row, currency_symbol));
        output.push_str(&format!("  [{}]\n", row.id));
    }
    output
}

//! Expense list rows
//!
//! The list honours the whole filter (dates and category) and an optional
//! free-text search.

use chrono::NaiveDate;

use super::aggregate::filter_expenses;
use super::labels::category_label;
use crate::models::{Category, Expense, ExpenseFilter, ExpenseId, Money};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub description: String,
    pub category_name: String,
    pub category_color: String,
    pub date: NaiveDate,
    pub amount: Money,
}

impl ExpenseRow {
    pub fn new(expense: &Expense, categories: &[Category]) -> Self {
        let (category_name, category_color) =
            category_label(categories, expense.category.as_ref());
        Self {
            id: expense.id.clone(),
            description: expense.description.clone(),
            category_name,
            category_color,
            date: expense.date,
            amount: expense.amount,
        }
    }

    /// Case-insensitive substring match over the row's visible text
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        [
            self.description.to_lowercase(),
            self.category_name.to_lowercase(),
            self.amount.to_string(),
            self.date.to_string(),
        ]
        .iter()
        .any(|field| field.contains(&query))
    }
}

/// Rows for the expense list in insertion order
pub fn expense_rows(
    expenses: &[Expense],
    categories: &[Category],
    filter: &ExpenseFilter,
    search: Option<&str>,
) -> Vec<ExpenseRow> {
    filter_expenses(expenses, filter)
        .into_iter()
        .map(|e| ExpenseRow::new(e, categories))
        .filter(|row| search.map_or(true, |q| row.matches_search(q)))
        .collect()
}

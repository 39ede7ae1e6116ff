//! Dashboard view
//!
//! Headline figures plus the category breakdown. The total and breakdown
//! cover the filter's date range only; the category restriction applies to
//! the expense list, not the dashboard.

use chrono::NaiveDate;

use super::aggregate::{
    budget_spent, budget_status, by_category, filter_expenses, monthly_to_date, total_of,
    BudgetStatus, CategoryKey,
};
use super::labels::category_label;
use crate::models::{Budget, Category, Expense, ExpenseFilter, Money};

/// One slice of the category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdownRow {
    pub key: CategoryKey,
    pub name: String,
    pub color: String,
    pub amount: Money,
    /// Share of the dashboard total, 0 when the total is 0
    pub percentage: f64,
}

/// Figures shown on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub total: Money,
    pub month_to_date: Money,
    pub category_count: usize,
    /// `None` when no overall budget is set
    pub overall_budget: Option<BudgetStatus>,
    pub breakdown: Vec<CategoryBreakdownRow>,
}

impl DashboardView {
    pub fn generate(
        expenses: &[Expense],
        categories: &[Category],
        budgets: &[Budget],
        filter: &ExpenseFilter,
        today: NaiveDate,
    ) -> Self {
        let in_range = filter_expenses(expenses, &filter.date_range_only());
        let total = total_of(in_range.iter().copied());

        let breakdown = by_category(in_range.iter().copied())
            .into_iter()
            .map(|(key, amount)| {
                let (name, color) = category_label(categories, key.category_id());
                CategoryBreakdownRow {
                    key,
                    name,
                    color,
                    amount,
                    percentage: amount.percent_of(total),
                }
            })
            .collect();

        let overall_budget = budgets
            .iter()
            .find(|b| b.is_overall())
            .map(|b| budget_status(b, budget_spent(b, expenses, today)));

        Self {
            total,
            month_to_date: monthly_to_date(expenses, today),
            category_count: categories.len(),
            overall_budget,
            breakdown,
        }
    }
}

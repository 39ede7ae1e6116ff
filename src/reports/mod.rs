//! Aggregation and view-models
//!
//! `aggregate` holds the pure computations; the other modules shape their
//! results into what the dashboard, chart, budget list and expense list show.

pub mod aggregate;
pub mod budget_overview;
pub mod chart;
pub mod dashboard;
pub mod expense_list;
pub mod labels;

pub use aggregate::{
    budget_spent, budget_status, by_category, filter_expenses, monthly_to_date, period_window,
    total_of, BudgetStatus, CategoryKey, UNCATEGORIZED_KEY,
};
pub use budget_overview::{BudgetLevel, BudgetRow};
pub use chart::ChartSeries;
pub use dashboard::{CategoryBreakdownRow, DashboardView};
pub use expense_list::{expense_rows, ExpenseRow};
pub use labels::category_label;

//! Core data models for the expense tracker
//!
//! This module contains the records that make up the persisted state
//! (expenses, categories, budgets) plus the transient expense filter.

pub mod budget;
pub mod category;
pub mod expense;
pub mod filter;
pub mod ids;
pub mod money;

pub use budget::{budget_id, Budget, BudgetPeriod, BudgetType, OVERALL_BUDGET_ID};
pub use category::{
    default_categories, Category, DEFAULT_CATEGORY_COLOR, UNCATEGORIZED_COLOR, UNCATEGORIZED_NAME,
};
pub use expense::Expense;
pub use filter::ExpenseFilter;
pub use ids::{CategoryId, ExpenseId};
pub use money::{Money, MAX_INPUT_UNITS};

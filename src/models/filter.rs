//! Transient expense filter
//!
//! Never persisted. Both date bounds are inclusive; an end date covers the
//! whole of that day.

use chrono::NaiveDate;

use super::expense::Expense;
use super::ids::CategoryId;

/// Date range and category restriction applied to expense views
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<CategoryId>,
}

impl ExpenseFilter {
    /// A filter that keeps everything
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to an inclusive date range
    pub fn between(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start_date: start,
            end_date: end,
            category: None,
        }
    }

    pub fn with_category(mut self, category: Option<CategoryId>) -> Self {
        self.category = category;
        self
    }

    /// The same date range without the category restriction
    pub fn date_range_only(&self) -> Self {
        Self::between(self.start_date, self.end_date)
    }

    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.category.is_none()
    }

    /// Whether an expense passes every set clause
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }

        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }

        match &self.category {
            Some(category) => expense.is_in_category(category),
            None => true,
        }
    }
}

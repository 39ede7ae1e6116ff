//! Budget rows
//!
//! One row per budget with its consumption in the current period window.

use chrono::NaiveDate;

use super::aggregate::{budget_spent, budget_status, BudgetStatus};
use crate::models::{Budget, BudgetPeriod, BudgetType, Category, Expense};

/// Title of the overall budget row
pub const OVERALL_TITLE: &str = "Overall Budget";
/// Title used when a category budget's category no longer exists
pub const MISSING_CATEGORY_TITLE: &str = "Category Budget";

/// How close a budget is to its ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetLevel {
    Ok,
    Warning,
    Over,
}

impl BudgetLevel {
    pub fn for_percentage(percentage: f64, warning_percent: f64) -> Self {
        if percentage >= 100.0 {
            Self::Over
        } else if percentage >= warning_percent {
            Self::Warning
        } else {
            Self::Ok
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRow {
    pub id: String,
    pub title: String,
    pub period: BudgetPeriod,
    pub status: BudgetStatus,
    pub level: BudgetLevel,
    /// Percentage for a progress bar, capped at 100
    pub progress: f64,
}

impl BudgetRow {
    pub fn generate(
        budget: &Budget,
        categories: &[Category],
        expenses: &[Expense],
        today: NaiveDate,
        warning_percent: f64,
    ) -> Self {
        let status = budget_status(budget, budget_spent(budget, expenses, today));

        let title = match budget.budget_type {
            BudgetType::Overall => OVERALL_TITLE.to_string(),
            BudgetType::Category => budget
                .category
                .as_ref()
                .and_then(|id| categories.iter().find(|c| &c.id == id))
                .map(|c| c.name.clone())
                .unwrap_or_else(|| MISSING_CATEGORY_TITLE.to_string()),
        };

        Self {
            id: budget.id.clone(),
            title,
            period: budget.period,
            level: BudgetLevel::for_percentage(status.percentage, warning_percent),
            progress: status.percentage.min(100.0),
            status,
        }
    }

    /// Rows for every budget, in collection order
    pub fn generate_all(
        budgets: &[Budget],
        categories: &[Category],
        expenses: &[Expense],
        today: NaiveDate,
        warning_percent: f64,
    ) -> Vec<Self> {
        budgets
            .iter()
            .map(|b| Self::generate(b, categories, expenses, today, warning_percent))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_categories, CategoryId, ExpenseId, Money};
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_levels() {
        assert_eq!(BudgetLevel::for_percentage(50.0, 80.0), BudgetLevel::Ok);
        assert_eq!(BudgetLevel::for_percentage(80.0, 80.0), BudgetLevel::Warning);
        assert_eq!(BudgetLevel::for_percentage(100.0, 80.0), BudgetLevel::Over);
    }

    #[test]
    fn test_rows() {
        let today = date(2025, 5, 10);
        let expenses = vec![Expense::new(
            ExpenseId::new("e"),
            Money::from_units(90),
            "Dinner",
            Some(CategoryId::new("1")),
            date(2025, 5, 2),
            Utc::now(),
        )];
        let budgets = vec![
            Budget::overall(Money::from_units(60), BudgetPeriod::Monthly),
            Budget::for_category(CategoryId::new("1"), Money::from_units(100), BudgetPeriod::Monthly),
            Budget::for_category(CategoryId::new("99"), Money::from_units(10), BudgetPeriod::Yearly),
        ];

        let rows = BudgetRow::generate_all(&budgets, &default_categories(), &expenses, today, 80.0);

        assert_eq!(rows[0].title, "Overall Budget");
        assert_eq!(rows[0].level, BudgetLevel::Over);
        assert_eq!(rows[0].progress, 100.0);

        assert_eq!(rows[1].title, "Food");
        assert_eq!(rows[1].level, BudgetLevel::Warning);

        assert_eq!(rows[2].title, "Category Budget");
        assert_eq!(rows[2].status.spent, Money::zero());
        assert_eq!(rows[2].level, BudgetLevel::Ok);
    }
}

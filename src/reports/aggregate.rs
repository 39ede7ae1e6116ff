//! Aggregation over the expense collections
//!
//! Pure functions: totals, per-category breakdowns, month-to-date spend and
//! budget consumption. Nothing here reads the clock; callers pass `today`.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;
use std::fmt;

use crate::models::{Budget, BudgetPeriod, BudgetType, CategoryId, Expense, ExpenseFilter, Money};

/// Sentinel used for the bucket of expenses without a category
pub const UNCATEGORIZED_KEY: &str = "uncategorized";

/// Grouping key for the category breakdown
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Category(CategoryId),
    Uncategorized,
}

impl CategoryKey {
    pub fn of(expense: &Expense) -> Self {
        match &expense.category {
            Some(id) => Self::Category(id.clone()),
            None => Self::Uncategorized,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Category(id) => id.as_str(),
            Self::Uncategorized => UNCATEGORIZED_KEY,
        }
    }

    pub fn category_id(&self) -> Option<&CategoryId> {
        match self {
            Self::Category(id) => Some(id),
            Self::Uncategorized => None,
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consumption of one budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetStatus {
    pub spent: Money,
    pub budget: Money,
    /// Negative when over budget
    pub remaining: Money,
    /// 0 when the budget amount is 0
    pub percentage: f64,
}

impl BudgetStatus {
    pub fn is_over(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Expenses passing every clause of `filter`, in input order
pub fn filter_expenses<'a>(expenses: &'a [Expense], filter: &ExpenseFilter) -> Vec<&'a Expense> {
    expenses.iter().filter(|e| filter.matches(e)).collect()
}

/// Sum of amounts; zero for no expenses
pub fn total_of<'a, I>(expenses: I) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().map(|e| e.amount).sum()
}

/// Spend per category, largest first
///
/// Equal amounts keep the order in which their category first appears in
/// the input.
pub fn by_category<'a, I>(expenses: I) -> Vec<(CategoryKey, Money)>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut buckets: Vec<(CategoryKey, Money)> = Vec::new();
    let mut index: HashMap<CategoryKey, usize> = HashMap::new();

    for expense in expenses {
        let key = CategoryKey::of(expense);
        match index.get(&key) {
            Some(&i) => buckets[i].1 += expense.amount,
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push((key, expense.amount));
            }
        }
    }

    // Stable sort keeps first-occurrence order among ties
    buckets.sort_by(|a, b| b.1.cmp(&a.1));
    buckets
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// January 1st of the year containing `date`
pub fn year_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.ordinal0()))
}

/// The most recent Sunday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Inclusive window a budget period covers, ending at `today`
pub fn period_window(period: BudgetPeriod, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = match period {
        BudgetPeriod::Weekly => week_start(today),
        BudgetPeriod::Monthly => month_start(today),
        BudgetPeriod::Yearly => year_start(today),
    };
    (start, today)
}

/// Spend from the first of `today`'s month through `today`
///
/// Always over the full expense list; the active filter does not apply.
pub fn monthly_to_date(all_expenses: &[Expense], today: NaiveDate) -> Money {
    let window = ExpenseFilter::between(Some(month_start(today)), Some(today));
    total_of(filter_expenses(all_expenses, &window))
}

/// Spend counted against `budget` in its current period window
pub fn budget_spent(budget: &Budget, all_expenses: &[Expense], today: NaiveDate) -> Money {
    let (start, end) = period_window(budget.period, today);
    let mut window = ExpenseFilter::between(Some(start), Some(end));
    if budget.budget_type == BudgetType::Category {
        window.category = budget.category.clone();
    }
    total_of(filter_expenses(all_expenses, &window))
}

/// Spent/remaining/percentage for a budget
pub fn budget_status(budget: &Budget, spent: Money) -> BudgetStatus {
    BudgetStatus {
        spent,
        budget: budget.amount,
        remaining: budget.amount - spent,
        percentage: spent.percent_of(budget.amount),
    }
}

//! Budget commands

use tracing::info;

use super::state::Collection;
use super::tracker::{CommandOutcome, Tracker, ViewKind};
use crate::error::{TrackerError, TrackerResult};
use crate::models::budget::BudgetValidationError;
use crate::models::{Budget, BudgetPeriod, BudgetType, Money};
use crate::storage::KeyValueStore;

/// Raw values from the budget form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetInput {
    pub budget_type: BudgetType,
    /// Category id or name, for category budgets
    pub category: Option<String>,
    pub amount: String,
    pub period: BudgetPeriod,
}

impl BudgetInput {
    /// Monthly overall budget
    pub fn overall(amount: impl Into<String>) -> Self {
        Self {
            budget_type: BudgetType::Overall,
            category: None,
            amount: amount.into(),
            period: BudgetPeriod::default(),
        }
    }

    /// Monthly budget for one category
    pub fn category(category: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            budget_type: BudgetType::Category,
            category: Some(category.into()),
            amount: amount.into(),
            period: BudgetPeriod::default(),
        }
    }

    pub fn with_period(mut self, period: BudgetPeriod) -> Self {
        self.period = period;
        self
    }
}

const BUDGET_VIEWS: &[ViewKind] = &[ViewKind::Budgets, ViewKind::Dashboard];

impl<S: KeyValueStore> Tracker<S> {
    /// Create or replace the budget for a scope
    ///
    /// The id is derived from the scope, so at most one overall budget and
    /// one budget per category exist.
    pub fn set_budget(&mut self, input: BudgetInput) -> TrackerResult<CommandOutcome<Budget>> {
        let amount = Money::parse(&input.amount)
            .map_err(|_| validation(BudgetValidationError::NonPositiveAmount))?;
        Budget::validate_amount(amount).map_err(validation)?;

        let budget = match input.budget_type {
            BudgetType::Overall => Budget::overall(amount, input.period),
            BudgetType::Category => {
                let identifier = input
                    .category
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| validation(BudgetValidationError::MissingCategory))?;
                let category = self
                    .state()
                    .find_category(identifier)
                    .map(|c| c.id.clone())
                    .ok_or_else(|| TrackerError::category_not_found(identifier))?;
                Budget::for_category(category, amount, input.period)
            }
        };

        let budgets = &mut self.state_mut().budgets;
        match budgets.iter_mut().find(|b| b.id == budget.id) {
            Some(existing) => {
                *existing = budget.clone();
                info!(id = %budget.id, amount = %budget.amount, "budget replaced");
            }
            None => {
                budgets.push(budget.clone());
                info!(id = %budget.id, amount = %budget.amount, "budget added");
            }
        }

        let warnings = self.persist(&[Collection::Budgets]);
        Ok(self.outcome(budget, BUDGET_VIEWS, warnings))
    }

    pub fn delete_budget(&mut self, id: &str) -> TrackerResult<CommandOutcome<Budget>> {
        let budgets = &mut self.state_mut().budgets;
        let index = budgets
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| TrackerError::budget_not_found(id))?;
        let removed = budgets.remove(index);

        info!(id = %removed.id, "budget deleted");
        let warnings = self.persist(&[Collection::Budgets]);
        Ok(self.outcome(removed, BUDGET_VIEWS, warnings))
    }
}

fn validation(err: BudgetValidationError) -> TrackerError {
    TrackerError::Validation(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;
    use crate::reports::BudgetLevel;
    use crate::services::{ExpenseInput, FixedClock, SequentialIds, ViewUpdate};
    use crate::storage::{MemoryStore, BUDGETS_KEY};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tracker(store: &MemoryStore) -> Tracker<&MemoryStore> {
        Tracker::load_with(
            store,
            Box::new(SequentialIds::new("b")),
            Box::new(FixedClock::on(date(2025, 6, 18))),
        )
        .unwrap()
    }

    #[test]
    fn test_set_budget_upserts_by_scope() {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);

        tracker.set_budget(BudgetInput::overall("1000")).unwrap();
        tracker.set_budget(BudgetInput::category("Food", "300")).unwrap();
        assert_eq!(tracker.budgets().len(), 2);

        let outcome = tracker
            .set_budget(BudgetInput::overall("1500").with_period(BudgetPeriod::Yearly))
            .unwrap();
        assert_eq!(tracker.budgets().len(), 2);
        assert_eq!(outcome.value.id, "overall");

        let overall = tracker.state().budget("overall").unwrap();
        assert_eq!(overall.amount, Money::from_units(1500));
        assert_eq!(overall.period, BudgetPeriod::Yearly);

        // same category given by id replaces the name-addressed one
        tracker.set_budget(BudgetInput::category("1", "250")).unwrap();
        assert_eq!(tracker.budgets().len(), 2);
        let food = tracker.state().budget("category-1").unwrap();
        assert_eq!(food.category, Some(CategoryId::new("1")));
        assert_eq!(food.amount, Money::from_units(250));

        assert!(store.get(BUDGETS_KEY).unwrap().unwrap().contains("category-1"));
    }

    #[test]
    fn test_set_budget_validation() {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);

        let err = tracker.set_budget(BudgetInput::overall("0")).unwrap_err();
        assert!(err.to_string().contains("Please enter a valid budget amount"));
        let err = tracker
            .set_budget(BudgetInput::overall("92233720368547758"))
            .unwrap_err();
        assert!(err.is_validation());

        let mut missing = BudgetInput::category("", "100");
        let err = tracker.set_budget(missing.clone()).unwrap_err();
        assert!(err.is_validation());
        missing.category = None;
        assert!(tracker.set_budget(missing).unwrap_err().is_validation());

        let err = tracker
            .set_budget(BudgetInput::category("Rent", "100"))
            .unwrap_err();
        assert!(err.is_not_found());

        assert!(tracker.budgets().is_empty());
    }

    #[test]
    fn test_budget_rows_follow_spending() {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);
        tracker.set_budget(BudgetInput::overall("1000")).unwrap();
        for (amount, day) in [("700", 2), ("500", 15)] {
            tracker
                .add_expense(ExpenseInput {
                    amount: amount.into(),
                    description: "rent".into(),
                    category: "Bills".into(),
                    date: date(2025, 6, day),
                })
                .unwrap();
        }

        let outcome = tracker.set_budget(BudgetInput::overall("1000")).unwrap();
        let rows = match outcome.update(ViewKind::Budgets) {
            Some(ViewUpdate::Budgets(rows)) => rows.clone(),
            other => panic!("expected budgets update, got {:?}", other),
        };

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status.spent, Money::from_units(1200));
        assert_eq!(rows[0].status.remaining, Money::from_units(-200));
        assert!((rows[0].status.percentage - 120.0).abs() < 1e-9);
        assert_eq!(rows[0].level, BudgetLevel::Over);
        assert!((rows[0].progress - 100.0).abs() < 1e-9);

        match outcome.update(ViewKind::Dashboard) {
            Some(ViewUpdate::Dashboard(view)) => {
                assert_eq!(view.overall_budget.unwrap().spent, Money::from_units(1200))
            }
            other => panic!("expected dashboard update, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_budget() {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);
        tracker.set_budget(BudgetInput::category("Fuel", "80")).unwrap();

        let removed = tracker.delete_budget("category-2").unwrap().value;
        assert_eq!(removed.category, Some(CategoryId::new("2")));
        assert!(tracker.budgets().is_empty());
        assert!(tracker.delete_budget("category-2").unwrap_err().is_not_found());
    }
}

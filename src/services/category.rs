//! Category commands
//!
//! Deleting a category does not delete its expenses; they fall back to
//! uncategorized.

use tracing::info;

use super::state::Collection;
use super::tracker::{CommandOutcome, Tracker, ViewKind};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, CategoryId, DEFAULT_CATEGORY_COLOR};
use crate::storage::KeyValueStore;

/// Raw values from the category form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInput {
    pub name: String,
    /// "#rrggbb"; `None` picks the default on add and keeps the current color on edit
    pub color: Option<String>,
}

impl CategoryInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Removed category plus the number of expenses that lost their reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedCategory {
    pub category: Category,
    pub cleared_expenses: usize,
}

impl<S: KeyValueStore> Tracker<S> {
    pub fn add_category(&mut self, input: CategoryInput) -> TrackerResult<CommandOutcome<Category>> {
        let color = input
            .color
            .as_deref()
            .map(str::trim)
            .unwrap_or(DEFAULT_CATEGORY_COLOR);

        // Validate against a placeholder id before drawing a real one
        let mut category = Category::new(CategoryId::new(""), input.name.trim(), color);
        category
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let id = self.fresh_id(|state, id| state.category(&CategoryId::new(id)).is_none());
        category.id = CategoryId::new(id);

        info!(id = %category.id, name = %category.name, "category added");
        self.state_mut().categories.push(category.clone());

        let warnings = self.persist(&[Collection::Categories]);
        Ok(self.outcome(category, &[ViewKind::Categories], warnings))
    }

    /// Rename and/or recolor a category
    ///
    /// Expenses and budgets reference the id, so they pick up the change.
    pub fn update_category(
        &mut self,
        id: &CategoryId,
        input: CategoryInput,
    ) -> TrackerResult<CommandOutcome<Category>> {
        let current = self
            .state()
            .category(id)
            .ok_or_else(|| TrackerError::category_not_found(id.as_str()))?;

        let color = match input.color.as_deref() {
            Some(color) => color.trim().to_string(),
            None => current.color.clone(),
        };
        let updated = Category::new(id.clone(), input.name.trim(), color);
        updated
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        if let Some(slot) = self.state_mut().categories.iter_mut().find(|c| &c.id == id) {
            *slot = updated.clone();
        }

        info!(id = %updated.id, name = %updated.name, "category updated");
        let warnings = self.persist(&[Collection::Categories]);
        Ok(self.outcome(
            updated,
            &[
                ViewKind::Categories,
                ViewKind::Expenses,
                ViewKind::Dashboard,
                ViewKind::Chart,
                ViewKind::Budgets,
            ],
            warnings,
        ))
    }

    /// Delete a category and clear it from every expense that used it
    ///
    /// Budgets on the category are kept and show a generic title.
    pub fn delete_category(
        &mut self,
        id: &CategoryId,
    ) -> TrackerResult<CommandOutcome<DeletedCategory>> {
        let state = self.state_mut();
        let index = state
            .categories
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| TrackerError::category_not_found(id.as_str()))?;
        let category = state.categories.remove(index);

        let mut cleared_expenses = 0;
        for expense in state.expenses.iter_mut().filter(|e| e.is_in_category(id)) {
            expense.category = None;
            cleared_expenses += 1;
        }

        info!(id = %category.id, cleared_expenses, "category deleted");
        let warnings = self.persist(&[Collection::Categories, Collection::Expenses]);
        Ok(self.outcome(
            DeletedCategory {
                category,
                cleared_expenses,
            },
            &[
                ViewKind::Categories,
                ViewKind::Expenses,
                ViewKind::Dashboard,
                ViewKind::Chart,
                ViewKind::Budgets,
            ],
            warnings,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, UNCATEGORIZED_NAME};
    use crate::services::{BudgetInput, ExpenseInput, FixedClock, SequentialIds, ViewUpdate};
    use crate::storage::{MemoryStore, CATEGORIES_KEY, EXPENSES_KEY};
    use chrono::NaiveDate;

    fn tracker(store: &MemoryStore) -> Tracker<&MemoryStore> {
        let today = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();
        Tracker::load_with(
            store,
            Box::new(SequentialIds::new("c")),
            Box::new(FixedClock::on(today)),
        )
        .unwrap()
    }

    fn spend(tracker: &mut Tracker<&MemoryStore>, amount: &str, category: &str) {
        tracker
            .add_expense(ExpenseInput {
                amount: amount.into(),
                description: "spend".into(),
                category: category.into(),
                date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            })
            .unwrap();
    }

    #[test]
    fn test_add_category_defaults_color() {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);

        let outcome = tracker.add_category(CategoryInput::named("  Rent ")).unwrap();
        assert_eq!(outcome.value.name, "Rent");
        assert_eq!(outcome.value.color, DEFAULT_CATEGORY_COLOR);
        assert_eq!(tracker.categories().len(), 11);

        match outcome.update(ViewKind::Categories) {
            Some(ViewUpdate::Categories(list)) => assert_eq!(list.len(), 11),
            other => panic!("expected categories update, got {:?}", other),
        }
        assert!(store.get(CATEGORIES_KEY).unwrap().unwrap().contains("Rent"));
    }

    #[test]
    fn test_add_category_rejects_bad_input() {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);

        let err = tracker.add_category(CategoryInput::named("   ")).unwrap_err();
        assert!(err.to_string().contains("Please enter a category name"));

        let err = tracker
            .add_category(CategoryInput::named("Rent").with_color("red"))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(tracker.categories().len(), 10);
    }

    #[test]
    fn test_update_category_keeps_color_when_omitted() {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);
        let food = CategoryId::new("1");

        let renamed = tracker
            .update_category(&food, CategoryInput::named("Meals"))
            .unwrap()
            .value;
        assert_eq!(renamed.name, "Meals");
        assert_eq!(renamed.color, "#ef4444");

        let recolored = tracker
            .update_category(&food, CategoryInput::named("Meals").with_color("#000000"))
            .unwrap()
            .value;
        assert_eq!(recolored.color, "#000000");
        assert_eq!(tracker.state().category(&food).unwrap().color, "#000000");

        assert!(tracker
            .update_category(&CategoryId::new("nope"), CategoryInput::named("x"))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_delete_category_clears_expense_references() {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);
        spend(&mut tracker, "10", "Dress");
        spend(&mut tracker, "20", "Dress");
        spend(&mut tracker, "5", "Food");

        let outcome = tracker.delete_category(&CategoryId::new("3")).unwrap();

        assert_eq!(outcome.value.category.name, "Dress");
        assert_eq!(outcome.value.cleared_expenses, 2);
        assert_eq!(tracker.categories().len(), 9);
        assert_eq!(
            tracker
                .expenses()
                .iter()
                .filter(|e| e.category.is_none())
                .count(),
            2
        );

        let rows = tracker.expense_rows(None);
        assert_eq!(
            rows.iter()
                .filter(|r| r.category_name == UNCATEGORIZED_NAME)
                .count(),
            2
        );

        let blob = store.get(EXPENSES_KEY).unwrap().unwrap();
        assert!(!blob.contains("\"3\""));
        assert!(!store.get(CATEGORIES_KEY).unwrap().unwrap().contains("Dress"));
    }

    #[test]
    fn test_delete_category_keeps_budget() {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);
        tracker
            .set_budget(BudgetInput::category("2", "500"))
            .unwrap();

        tracker.delete_category(&CategoryId::new("2")).unwrap();

        assert_eq!(tracker.budgets().len(), 1);
        let rows = tracker.budget_rows();
        assert_eq!(rows[0].title, "Category Budget");
        assert_eq!(rows[0].status.budget, Money::from_units(500));
    }

    #[test]
    fn test_delete_unknown_category() {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);
        let err = tracker.delete_category(&CategoryId::new("99")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(tracker.categories().len(), 10);
    }
}

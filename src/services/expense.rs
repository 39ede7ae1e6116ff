//! Expense commands
//!
//! Add, edit and delete expenses from raw form values.

use chrono::NaiveDate;
use tracing::info;

use super::state::Collection;
use super::tracker::{CommandOutcome, Tracker, ViewKind};
use crate::error::{TrackerError, TrackerResult};
use crate::models::expense::ExpenseValidationError;
use crate::models::{CategoryId, Expense, ExpenseId, Money};
use crate::storage::KeyValueStore;

/// Raw values from the expense form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseInput {
    /// Amount as typed, e.g. "120.50"
    pub amount: String,
    pub description: String,
    /// Category id or name
    pub category: String,
    pub date: NaiveDate,
}

const EXPENSE_VIEWS: &[ViewKind] = &[ViewKind::Expenses, ViewKind::Dashboard, ViewKind::Chart];

impl<S: KeyValueStore> Tracker<S> {
    /// Record a new expense
    pub fn add_expense(&mut self, input: ExpenseInput) -> TrackerResult<CommandOutcome<Expense>> {
        let (amount, description, category) = self.validate_expense_input(&input)?;

        let id = self.fresh_id(|state, id| state.expense(&ExpenseId::new(id)).is_none());
        let expense = Expense::new(
            ExpenseId::new(id),
            amount,
            description,
            Some(category),
            input.date,
            self.now(),
        );

        info!(id = %expense.id, amount = %expense.amount, "expense added");
        self.state_mut().expenses.push(expense.clone());

        let warnings = self.persist(&[Collection::Expenses]);
        Ok(self.outcome(expense, EXPENSE_VIEWS, warnings))
    }

    /// Edit amount, description, category and date of an existing expense
    ///
    /// The id and creation time are kept.
    pub fn update_expense(
        &mut self,
        id: &ExpenseId,
        input: ExpenseInput,
    ) -> TrackerResult<CommandOutcome<Expense>> {
        let (amount, description, category) = self.validate_expense_input(&input)?;

        let expense = self
            .state_mut()
            .expenses
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| TrackerError::expense_not_found(id.as_str()))?;

        expense.amount = amount;
        expense.description = description;
        expense.category = Some(category);
        expense.date = input.date;
        let updated = expense.clone();

        info!(id = %updated.id, "expense updated");
        let warnings = self.persist(&[Collection::Expenses]);
        Ok(self.outcome(updated, EXPENSE_VIEWS, warnings))
    }

    /// Remove an expense
    pub fn delete_expense(&mut self, id: &ExpenseId) -> TrackerResult<CommandOutcome<Expense>> {
        let expenses = &mut self.state_mut().expenses;
        let index = expenses
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| TrackerError::expense_not_found(id.as_str()))?;
        let removed = expenses.remove(index);

        info!(id = %removed.id, "expense deleted");
        let warnings = self.persist(&[Collection::Expenses]);
        Ok(self.outcome(removed, EXPENSE_VIEWS, warnings))
    }

    /// Check form values in the order the form reports them
    fn validate_expense_input(
        &self,
        input: &ExpenseInput,
    ) -> TrackerResult<(Money, String, CategoryId)> {
        let amount = Money::parse(&input.amount)
            .map_err(|_| validation(ExpenseValidationError::NonPositiveAmount))?;
        let description = input.description.trim();
        Expense::validate_fields(amount, description).map_err(validation)?;

        let category = input.category.trim();
        if category.is_empty() {
            return Err(validation(ExpenseValidationError::MissingCategory));
        }
        let category = self
            .state()
            .find_category(category)
            .map(|c| c.id.clone())
            .ok_or_else(|| TrackerError::category_not_found(category))?;

        Ok((amount, description.to_string(), category))
    }
}

fn validation(err: ExpenseValidationError) -> TrackerError {
    TrackerError::Validation(err.to_string())
}

//! Expense model
//!
//! A single recorded spend. Serialized with camelCase keys so the persisted
//! blob reads `{"id", "amount", "description", "category", "date", "createdAt"}`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, fixed at creation
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// What the money was spent on
    pub description: String,

    /// Category reference; `None` means uncategorized
    #[serde(default, deserialize_with = "blank_as_uncategorized")]
    pub category: Option<CategoryId>,

    /// Calendar date of the spend
    pub date: NaiveDate,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// Read an empty category reference as uncategorized
fn blank_as_uncategorized<'de, D>(deserializer: D) -> Result<Option<CategoryId>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<String>::deserialize(deserializer)?;
    Ok(id.filter(|id| !id.trim().is_empty()).map(CategoryId::new))
}

impl Expense {
    /// Create a new expense
    pub fn new(
        id: ExpenseId,
        amount: Money,
        description: impl Into<String>,
        category: Option<CategoryId>,
        date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            amount,
            description: description.into(),
            category,
            date,
            created_at,
        }
    }

    /// Whether this expense belongs to the given category
    pub fn is_in_category(&self, category: &CategoryId) -> bool {
        self.category.as_ref() == Some(category)
    }

    /// Validate the editable fields of an expense
    ///
    /// The amount must be positive and within
    /// [`MAX_INPUT_UNITS`](super::money::MAX_INPUT_UNITS). The description
    /// must not be blank.
    pub fn validate_fields(amount: Money, description: &str) -> Result<(), ExpenseValidationError> {
        if !amount.is_valid_input() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        if description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.description, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    EmptyDescription,
    MissingCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Please enter a valid amount"),
            Self::EmptyDescription => write!(f, "Please enter a description"),
            Self::MissingCategory => write!(f, "Please select a category"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::money::MAX_INPUT_UNITS;

    fn sample() -> Expense {
        Expense::new(
            ExpenseId::new("e1"),
            Money::from_units(100),
            "Lunch",
            Some(CategoryId::new("1")),
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            Utc::now(),
        )
    }

    #[test]
    fn test_validation() {
        let expense = sample();
        assert!(Expense::validate_fields(expense.amount, &expense.description).is_ok());

        assert_eq!(
            Expense::validate_fields(Money::zero(), "Lunch"),
            Err(ExpenseValidationError::NonPositiveAmount)
        );
        assert_eq!(
            Expense::validate_fields(Money::from_units(MAX_INPUT_UNITS + 1), "Lunch"),
            Err(ExpenseValidationError::NonPositiveAmount)
        );
        assert_eq!(
            Expense::validate_fields(Money::from_units(1), " "),
            Err(ExpenseValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_camel_case_blob() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["category"], "1");
        assert_eq!(json["date"], "2025-01-05");
        assert_eq!(json["amount"], 10000);
    }

    #[test]
    fn test_missing_category_loads_as_uncategorized() {
        let json = r#"{"id":"e2","amount":500,"description":"Tea",
            "date":"2025-02-01","createdAt":"2025-02-01T08:00:00Z"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert!(expense.category.is_none());
    }

    #[test]
    fn test_empty_category_loads_as_uncategorized() {
        let json = r#"{"id":"e3","amount":500,"description":"Tea","category":"",
            "date":"2025-02-01","createdAt":"2025-02-01T08:00:00Z"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert!(expense.category.is_none());

        let json = r#"{"id":"e4","amount":500,"description":"Tea","category":null,
            "date":"2025-02-01","createdAt":"2025-02-01T08:00:00Z"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert!(expense.category.is_none());
    }
}

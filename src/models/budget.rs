//! Budget model
//!
//! A budget caps spending either overall or for a single category over a
//! recurring period. The id is derived from the scope, so setting a budget
//! for the same scope twice replaces the earlier one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// Id of the single overall budget
pub const OVERALL_BUDGET_ID: &str = "overall";

/// Whether a budget covers all spending or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetType {
    Overall,
    Category,
}

impl fmt::Display for BudgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overall => write!(f, "overall"),
            Self::Category => write!(f, "category"),
        }
    }
}

/// The recurring window a budget is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    /// Parse a period name ("weekly", "monthly", "yearly")
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Some(Self::Weekly),
            "monthly" | "month" => Some(Self::Monthly),
            "yearly" | "year" | "annual" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// A spending ceiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Derived id: "overall" or "category-{categoryId}"
    pub id: String,

    #[serde(rename = "type")]
    pub budget_type: BudgetType,

    /// Set only for category budgets
    pub category: Option<CategoryId>,

    pub amount: Money,

    pub period: BudgetPeriod,
}

impl Budget {
    /// Create the overall budget
    pub fn overall(amount: Money, period: BudgetPeriod) -> Self {
        Self {
            id: budget_id(BudgetType::Overall, None),
            budget_type: BudgetType::Overall,
            category: None,
            amount,
            period,
        }
    }

    /// Create a budget for one category
    pub fn for_category(category: CategoryId, amount: Money, period: BudgetPeriod) -> Self {
        Self {
            id: budget_id(BudgetType::Category, Some(&category)),
            budget_type: BudgetType::Category,
            category: Some(category),
            amount,
            period,
        }
    }

    pub fn is_overall(&self) -> bool {
        self.budget_type == BudgetType::Overall
    }

    /// Validate a budget amount
    ///
    /// Must be positive and within [`MAX_INPUT_UNITS`](super::money::MAX_INPUT_UNITS).
    pub fn validate_amount(amount: Money) -> Result<(), BudgetValidationError> {
        if !amount.is_valid_input() {
            return Err(BudgetValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

/// Derive the upsert key for a budget scope
pub fn budget_id(budget_type: BudgetType, category: Option<&CategoryId>) -> String {
    match (budget_type, category) {
        (BudgetType::Category, Some(category)) => format!("category-{}", category),
        (BudgetType::Category, None) => "category-".to_string(),
        (BudgetType::Overall, _) => OVERALL_BUDGET_ID.to_string(),
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount,
    MissingCategory,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Please enter a valid budget amount"),
            Self::MissingCategory => write!(f, "Please select a category"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

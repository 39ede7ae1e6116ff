//! Category model
//!
//! Categories are user-defined labels with a display color. Expenses
//! reference them by id; an expense whose category is missing renders as
//! "Uncategorized".

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Display name used for expenses without a (known) category
pub const UNCATEGORIZED_NAME: &str = "Uncategorized";

/// Neutral color used for expenses without a (known) category
pub const UNCATEGORIZED_COLOR: &str = "#94a3b8";

/// Color given to new categories when none is chosen
pub const DEFAULT_CATEGORY_COLOR: &str = "#3498db";

/// A spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Display color as "#rrggbb"
    pub color: String,
}

impl Category {
    /// Create a new category
    pub fn new(id: CategoryId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if !is_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Check for a "#rrggbb" color value
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// The ten categories every fresh tracker starts with
pub fn default_categories() -> Vec<Category> {
    [
        ("1", "Food", "#ef4444"),
        ("2", "Fuel", "#f59e0b"),
        ("3", "Dress", "#8b5cf6"),
        ("4", "Groceries", "#10b981"),
        ("5", "Transport", "#3b82f6"),
        ("6", "Entertainment", "#ec4899"),
        ("7", "Bills", "#6366f1"),
        ("8", "Healthcare", "#14b8a6"),
        ("9", "Shopping", "#f97316"),
        ("10", "Others", "#94a3b8"),
    ]
    .into_iter()
    .map(|(id, name, color)| Category::new(CategoryId::new(id), name, color))
    .collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Please enter a category name"),
            Self::InvalidColor(color) => {
                write!(f, "Invalid category color '{}' (expected #rrggbb)", color)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

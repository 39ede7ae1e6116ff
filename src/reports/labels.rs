//! Category name/color resolution for views

use crate::models::{Category, CategoryId, UNCATEGORIZED_COLOR, UNCATEGORIZED_NAME};

/// Display name and color for a category reference
///
/// Missing or unknown categories resolve to "Uncategorized" in the neutral
/// color rather than failing.
pub fn category_label(categories: &[Category], id: Option<&CategoryId>) -> (String, String) {
    id.and_then(|id| categories.iter().find(|c| &c.id == id))
        .map(|c| (c.name.clone(), c.color.clone()))
        .unwrap_or_else(|| (UNCATEGORIZED_NAME.to_string(), UNCATEGORIZED_COLOR.to_string()))
}

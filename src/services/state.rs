//! Application state
//!
//! The three persisted collections, loaded once at startup.

use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::error::TrackerResult;
use crate::models::{default_categories, Budget, Category, CategoryId, Expense, ExpenseId};
use crate::storage::{
    load_collection, save_collection, KeyValueStore, BUDGETS_KEY, CATEGORIES_KEY, EXPENSES_KEY,
};

/// Warning shown when a collection could not be written
pub const STORAGE_WARNING: &str = "Error saving data. Please check your storage settings.";

/// The persisted collections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub expenses: Vec<Expense>,
    pub categories: Vec<Category>,
    pub budgets: Vec<Budget>,
}

/// Names one persisted collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Expenses,
    Categories,
    Budgets,
}

impl Collection {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Expenses => EXPENSES_KEY,
            Self::Categories => CATEGORIES_KEY,
            Self::Budgets => BUDGETS_KEY,
        }
    }
}

impl AppState {
    /// Load every collection, seeding default categories when there are none
    ///
    /// Returns the state and any warnings raised while loading, such as an
    /// unreadable collection that was copied aside or a seed that could not
    /// be saved.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> TrackerResult<(Self, Vec<String>)> {
        let mut warnings = Vec::new();
        let mut state = Self {
            expenses: load_or_warn(store, EXPENSES_KEY, &mut warnings)?,
            categories: load_or_warn(store, CATEGORIES_KEY, &mut warnings)?,
            budgets: load_or_warn(store, BUDGETS_KEY, &mut warnings)?,
        };

        if state.categories.is_empty() {
            info!("no categories stored, seeding defaults");
            state.categories = default_categories();
            state.persist(store, &[Collection::Categories], &mut warnings);
        }

        Ok((state, warnings))
    }

    /// Write the given collections, recording a warning per failure
    ///
    /// In-memory state is kept either way.
    pub fn persist<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        collections: &[Collection],
        warnings: &mut Vec<String>,
    ) {
        for collection in collections {
            let key = collection.key();
            let result = match collection {
                Collection::Expenses => save_collection(store, key, &self.expenses),
                Collection::Categories => save_collection(store, key, &self.categories),
                Collection::Budgets => save_collection(store, key, &self.budgets),
            };

            if let Err(e) = result {
                error!(key, error = %e, "failed to persist collection");
                if !warnings.iter().any(|w| w == STORAGE_WARNING) {
                    warnings.push(STORAGE_WARNING.to_string());
                }
            }
        }
    }

    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn budget(&self, id: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    /// Find a category by exact id, then by case-insensitive name
    pub fn find_category(&self, identifier: &str) -> Option<&Category> {
        let identifier = identifier.trim();
        self.categories
            .iter()
            .find(|c| c.id.as_str() == identifier)
            .or_else(|| {
                let lower = identifier.to_lowercase();
                self.categories
                    .iter()
                    .find(|c| c.name.to_lowercase() == lower)
            })
    }
}

fn load_or_warn<T, S>(store: &S, key: &str, warnings: &mut Vec<String>) -> TrackerResult<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let loaded = load_collection(store, key)?;
    if let Some(backup) = loaded.moved_to {
        warnings.push(format!(
            "Stored {} could not be read and were moved to '{}'. Starting with none.",
            key, backup
        ));
    }
    Ok(loaded.items)
}

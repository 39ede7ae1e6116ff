//! JSON Export functionality
//!
//! Exports all three collections to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, Category, Expense};
use crate::reports::total_of;
use crate::services::AppState;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full snapshot of the tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub expenses: Vec<Expense>,

    pub categories: Vec<Category>,

    pub budgets: Vec<Budget>,

    pub metadata: ExportMetadata,
}

/// Summary figures for a reader skimming the file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    pub category_count: usize,

    pub budget_count: usize,

    /// Sum of every expense, in currency units
    pub total_spent: String,

    /// Date of the earliest expense
    pub earliest_expense: Option<String>,

    /// Date of the latest expense
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Snapshot the current state
    pub fn from_state(state: &AppState, exported_at: DateTime<Utc>) -> Self {
        let metadata = ExportMetadata {
            expense_count: state.expenses.len(),
            category_count: state.categories.len(),
            budget_count: state.budgets.len(),
            total_spent: total_of(&state.expenses).to_string(),
            earliest_expense: state.expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: state.expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: state.expenses.clone(),
            categories: state.categories.clone(),
            budgets: state.budgets.clone(),
            metadata,
        }
    }
}

/// Export the full snapshot as pretty-printed JSON
pub fn export_full_json<W: Write>(
    state: &AppState,
    exported_at: DateTime<Utc>,
    writer: &mut W,
) -> TrackerResult<()> {
    let export = FullExport::from_state(state, exported_at);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

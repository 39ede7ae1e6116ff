//! CSV Export functionality
//!
//! Exports expenses to a spreadsheet-friendly CSV, one row per expense with
//! the category resolved to its name.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::reports::category_label;
use crate::services::AppState;

const HEADER: [&str; 6] = ["ID", "Date", "Description", "Category", "Amount", "Created At"];

fn export_error(e: ::csv::Error) -> TrackerError {
    TrackerError::Export(e.to_string())
}

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(state: &AppState, writer: W) -> TrackerResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER).map_err(export_error)?;

    for expense in &state.expenses {
        let (category_name, _) = category_label(&state.categories, expense.category.as_ref());
        let date = expense.date.to_string();
        let amount = expense.amount.to_string();
        let created_at = expense.created_at.to_rfc3339();
        let record: [&str; 6] = [
            expense.id.as_str(),
            &date,
            &expense.description,
            &category_name,
            &amount,
            &created_at,
        ];
        csv_writer.write_record(record).map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}

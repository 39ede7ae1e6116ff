//! YAML Export functionality
//!
//! Same snapshot as the JSON export, in a human-readable form.

use chrono::{DateTime, Utc};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::FullExport;
use crate::services::AppState;

/// Export the full snapshot to YAML with a comment header
pub fn export_full_yaml<W: Write>(
    state: &AppState,
    exported_at: DateTime<Utc>,
    writer: &mut W,
) -> TrackerResult<()> {
    let export = FullExport::from_state(state, exported_at);
    let io_err = |e: std::io::Error| TrackerError::Export(e.to_string());

    writeln!(writer, "# Expense Tracker Export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(&mut *writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

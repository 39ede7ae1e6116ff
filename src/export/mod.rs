//! Export module for the expense tracker
//!
//! Provides data export in multiple formats:
//! - CSV: expenses only (spreadsheet-compatible)
//! - JSON: machine-readable full snapshot
//! - YAML: human-readable full snapshot

pub mod csv;
pub mod json;
pub mod yaml;

use chrono::{DateTime, Utc};
use std::fmt;
use std::io::Write;

use crate::error::TrackerResult;
use crate::services::AppState;

pub use self::csv::export_expenses_csv;
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Parse a format name or file extension
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write the state in the given format
pub fn export<W: Write>(
    state: &AppState,
    format: ExportFormat,
    exported_at: DateTime<Utc>,
    writer: &mut W,
) -> TrackerResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(state, writer),
        ExportFormat::Json => export_full_json(state, exported_at, writer),
        ExportFormat::Yaml => export_full_yaml(state, exported_at, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(ExportFormat::parse("CSV"), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::parse("yml"), Some(ExportFormat::Yaml));
        assert_eq!(ExportFormat::parse("xml"), None);
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_dispatch() {
        let mut buffer = Vec::new();
        export(&AppState::default(), ExportFormat::Json, Utc::now(), &mut buffer).unwrap();
        assert!(String::from_utf8(buffer).unwrap().contains("\"schema_version\""));
    }
}

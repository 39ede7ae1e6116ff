//! CLI command for data export

use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};
use crate::export::{self, ExportFormat};
use crate::services::AppState;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (full snapshot)
    Json,
    /// YAML format (full snapshot, human-readable)
    Yaml,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Yaml => ExportFormat::Yaml,
        }
    }
}

/// Arguments for the export command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Export format (default: from the output extension, else json)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    fn resolve_format(&self) -> ExportFormat {
        self.format.map(ExportFormat::from).unwrap_or_else(|| {
            self.output
                .as_deref()
                .and_then(Path::extension)
                .and_then(|ext| ext.to_str())
                .and_then(ExportFormat::parse)
                .unwrap_or(ExportFormat::Json)
        })
    }
}

/// Handle the export command
pub fn handle_export_command(
    state: &AppState,
    exported_at: DateTime<Utc>,
    args: ExportArgs,
) -> TrackerResult<()> {
    let format = args.resolve_format();

    match &args.output {
        Some(output) => {
            let file = File::create(output).map_err(|e| {
                TrackerError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            export::export(state, format, exported_at, &mut writer)?;
            writer
                .flush()
                .map_err(|e| TrackerError::Export(e.to_string()))?;

            match format {
                ExportFormat::Csv => {
                    println!(
                        "Exported {} expenses to: {}",
                        state.expenses.len(),
                        output.display()
                    );
                    println!("Note: CSV format exports expenses only. Use JSON or YAML for a full export.");
                }
                ExportFormat::Json | ExportFormat::Yaml => {
                    println!("Full snapshot exported to: {}", output.display());
                }
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export::export(state, format, exported_at, &mut writer)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_resolution() {
        let args = |format, output: Option<&str>| ExportArgs {
            format,
            output: output.map(PathBuf::from),
        };

        assert_eq!(args(None, None).resolve_format(), ExportFormat::Json);
        assert_eq!(args(None, Some("out.csv")).resolve_format(), ExportFormat::Csv);
        assert_eq!(args(None, Some("out.YML")).resolve_format(), ExportFormat::Yaml);
        assert_eq!(args(None, Some("out.txt")).resolve_format(), ExportFormat::Json);
        assert_eq!(
            args(Some(FormatArg::Yaml), Some("out.csv")).resolve_format(),
            ExportFormat::Yaml
        );
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let output = temp_dir.path().join("backup.yaml");

        handle_export_command(
            &AppState::default(),
            Utc::now(),
            ExportArgs {
                format: None,
                output: Some(output.clone()),
            },
        )
        .unwrap();

        let text = std::fs::read_to_string(output).unwrap();
        assert!(text.starts_with("# Expense Tracker Export"));
    }
}

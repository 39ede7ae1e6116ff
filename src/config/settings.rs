//! User settings for the expense tracker
//!
//! Display preferences and the budget warning threshold, stored as
//! `config.json` in the base directory.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Budget usage (percent) at which a budget is flagged as a warning
    #[serde(default = "default_warning_percent")]
    pub budget_warning_percent: f64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_warning_percent() -> f64 {
    80.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            budget_warning_percent: default_warning_percent(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the display layer cannot use
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !formats_plain_dates(&self.date_format) {
            return Err(TrackerError::Config(format!(
                "Invalid date format: {}",
                self.date_format
            )));
        }

        if !(0.0..=100.0).contains(&self.budget_warning_percent) {
            return Err(TrackerError::Config(format!(
                "Budget warning percent must be between 0 and 100, got {}",
                self.budget_warning_percent
            )));
        }

        Ok(())
    }
}

/// Whether `date_format` can render a date without a time of day
fn formats_plain_dates(date_format: &str) -> bool {
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let Some(sample) = NaiveDate::from_ymd_opt(2000, 1, 31) else {
        return false;
    };
    let mut out = String::new();
    write!(out, "{}", sample.format(date_format)).is_ok()
}

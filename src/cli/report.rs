//! Dashboard and chart commands

use clap::Args;

use super::FilterArgs;
use crate::config::Settings;
use crate::display::{format_chart, format_dashboard};
use crate::error::TrackerResult;
use crate::services::Tracker;
use crate::storage::KeyValueStore;

/// Arguments for the chart command
#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Width of the longest bar in characters
    #[arg(short, long, default_value = "30")]
    pub width: usize,
}

/// Show the dashboard cards and category breakdown
///
/// Only the date range applies here; `--category` narrows nothing on the dashboard.
pub fn handle_dashboard_command<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    settings: &Settings,
    filter: FilterArgs,
) -> TrackerResult<()> {
    filter.apply(tracker)?;
    print!(
        "{}",
        format_dashboard(&tracker.dashboard(), &settings.currency_symbol)
    );
    Ok(())
}

/// Show spending by category as a bar chart
pub fn handle_chart_command<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    settings: &Settings,
    args: ChartArgs,
) -> TrackerResult<()> {
    args.filter.apply(tracker)?;
    print!(
        "{}",
        format_chart(&tracker.chart(), &settings.currency_symbol, args.width)
    );
    Ok(())
}

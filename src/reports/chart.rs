//! Series handed to the proportion chart
//!
//! Three parallel lists in breakdown order. The chart itself only renders;
//! tooltip text is computed here.

use super::dashboard::CategoryBreakdownRow;
use crate::models::Money;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<Money>,
    pub colors: Vec<String>,
}

impl ChartSeries {
    pub fn from_breakdown(rows: &[CategoryBreakdownRow]) -> Self {
        Self {
            labels: rows.iter().map(|r| r.name.clone()).collect(),
            values: rows.iter().map(|r| r.amount).collect(),
            colors: rows.iter().map(|r| r.color.clone()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> Money {
        self.values.iter().sum()
    }

    /// Share of slice `index` in the series total
    pub fn percentage(&self, index: usize) -> f64 {
        self.values
            .get(index)
            .map(|v| v.percent_of(self.total()))
            .unwrap_or(0.0)
    }

    /// Hover text for slice `index`, e.g. "Food: ₹150.00 (60.0%)"
    pub fn tooltip(&self, index: usize, currency_symbol: &str) -> Option<String> {
        let label = self.labels.get(index)?;
        let value = self.values.get(index)?;
        Some(format!(
            "{}: {} ({:.1}%)",
            label,
            value.format_with_symbol(currency_symbol),
            self.percentage(index)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::aggregate::CategoryKey;

    fn row(name: &str, units: i64) -> CategoryBreakdownRow {
        CategoryBreakdownRow {
            key: CategoryKey::Uncategorized,
            name: name.into(),
            color: "#000000".into(),
            amount: Money::from_units(units),
            percentage: 0.0,
        }
    }

    #[test]
    fn test_parallel_lists_and_tooltip() {
        let series = ChartSeries::from_breakdown(&[row("Food", 150), row("Fuel", 100)]);

        assert_eq!(series.len(), 2);
        assert_eq!(series.labels, vec!["Food", "Fuel"]);
        assert_eq!(series.total(), Money::from_units(250));
        assert_eq!(
            series.tooltip(0, "₹").as_deref(),
            Some("Food: ₹150.00 (60.0%)")
        );
        assert!(series.tooltip(2, "₹").is_none());
    }

    #[test]
    fn test_empty_series() {
        let series = ChartSeries::from_breakdown(&[]);
        assert!(series.is_empty());
        assert_eq!(series.percentage(0), 0.0);
    }
}

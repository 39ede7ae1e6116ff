//! Dashboard and chart formatting

use crate::reports::{ChartSeries, DashboardView};

use super::report::{double_separator, format_bar, format_header, format_percentage, separator, truncate};

const WIDTH: usize = 60;

/// Format the dashboard cards and category breakdown
pub fn format_dashboard(view: &DashboardView, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format_header("Dashboard", WIDTH));
    output.push('\n');
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    output.push_str(&format!(
        "Total Expenses:   {:>14}\n",
        view.total.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "This Month:       {:>14}\n",
        view.month_to_date.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Categories:       {:>14}\n", view.category_count));

    match &view.overall_budget {
        Some(status) => output.push_str(&format!(
            "Budget Remaining: {:>14}  ({} used)\n",
            status.remaining.format_with_symbol(currency_symbol),
            format_percentage(status.percentage)
        )),
        None => output.push_str(&format!("Budget Remaining: {:>14}\n", "-")),
    }

    output.push('\n');
    output.push_str("Spending by Category\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if view.breakdown.is_empty() {
        output.push_str("No expenses in this range.\n");
        return output;
    }

    for row in &view.breakdown {
        output.push_str(&format!(
            "{:16} {:>14} {:>7}\n",
            truncate(&row.name, 16),
            row.amount.format_with_symbol(currency_symbol),
            format_percentage(row.percentage)
        ));
    }

    output
}

/// Format the chart series as horizontal bars, one per slice
///
/// Each line ends with the slice's tooltip text.
pub fn format_chart(series: &ChartSeries, currency_symbol: &str, bar_width: usize) -> String {
    if series.is_empty() {
        return "No data to chart.\n".to_string();
    }

    let max = series
        .values
        .iter()
        .map(|v| v.as_f64())
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    for (index, value) in series.values.iter().enumerate() {
        let tooltip = series
            .tooltip(index, currency_symbol)
            .unwrap_or_default();
        output.push_str(&format!(
            "{} {}\n",
            format_bar(value.as_f64(), max, bar_width),
            tooltip
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_categories, Budget, BudgetPeriod, CategoryId, Expense, ExpenseFilter, ExpenseId, Money};
    use chrono::{NaiveDate, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn view(with_budget: bool) -> DashboardView {
        let expenses = vec![
            Expense::new(
                ExpenseId::new("a"),
                Money::from_units(150),
                "Lunch",
                Some(CategoryId::new("1")),
                date(2025, 1, 5),
                Utc::now(),
            ),
            Expense::new(
                ExpenseId::new("b"),
                Money::from_units(100),
                "Petrol",
                Some(CategoryId::new("2")),
                date(2025, 1, 6),
                Utc::now(),
            ),
        ];
        let budgets = if with_budget {
            vec![Budget::overall(Money::from_units(1000), BudgetPeriod::Monthly)]
        } else {
            Vec::new()
        };
        DashboardView::generate(
            &expenses,
            &default_categories(),
            &budgets,
            &ExpenseFilter::all(),
            date(2025, 1, 20),
        )
    }

    #[test]
    fn test_dashboard_cards() {
        let out = format_dashboard(&view(true), "₹");
        assert!(out.contains("₹250.00"));
        assert!(out.contains("₹750.00"));
        assert!(out.contains("25% used"));
        assert!(out.contains("Food"));
        assert!(out.contains("60%"));
    }

    #[test]
    fn test_dashboard_without_budget() {
        let out = format_dashboard(&view(false), "₹");
        assert!(out.contains("Budget Remaining:"));
        assert!(!out.contains("used"));
    }

    #[test]
    fn test_chart_lines_carry_tooltips() {
        let series = ChartSeries::from_breakdown(&view(false).breakdown);
        let out = format_chart(&series, "₹", 10);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("██████████"));
        assert!(lines[0].ends_with("Food: ₹150.00 (60.0%)"));
        assert!(lines[1].ends_with("Fuel: ₹100.00 (40.0%)"));
    }

    #[test]
    fn test_empty_chart() {
        assert_eq!(format_chart(&ChartSeries::default(), "₹", 10), "No data to chart.\n");
    }
}

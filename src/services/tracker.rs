//! The tracker: command/query interface over the application state
//!
//! Commands validate their input, mutate the owned [`AppState`], persist the
//! touched collections and return the views that need re-rendering. Queries
//! compute view-models on demand. Entity commands live in the sibling
//! `expense`, `category` and `budget` modules.

use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::id_gen::{IdGenerator, UuidGenerator};
use super::state::{AppState, Collection};
use crate::error::TrackerResult;
use crate::models::{Budget, Category, Expense, ExpenseFilter};
use crate::reports::{
    expense_rows, BudgetRow, ChartSeries, DashboardView, ExpenseRow,
};
use crate::storage::KeyValueStore;

/// Default budget warning threshold (percent)
pub const DEFAULT_WARNING_PERCENT: f64 = 80.0;

/// Which rendered view a command invalidated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Expenses,
    Categories,
    Budgets,
    Dashboard,
    Chart,
}

/// A refreshed view-model
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    Expenses(Vec<ExpenseRow>),
    Categories(Vec<Category>),
    Budgets(Vec<BudgetRow>),
    Dashboard(DashboardView),
    Chart(ChartSeries),
}

impl ViewUpdate {
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Expenses(_) => ViewKind::Expenses,
            Self::Categories(_) => ViewKind::Categories,
            Self::Budgets(_) => ViewKind::Budgets,
            Self::Dashboard(_) => ViewKind::Dashboard,
            Self::Chart(_) => ViewKind::Chart,
        }
    }
}

/// Result of a successful command
#[derive(Debug, Clone)]
pub struct CommandOutcome<T = ()> {
    /// What the command produced (e.g. the new record)
    pub value: T,
    /// Views to re-render, in render order
    pub updates: Vec<ViewUpdate>,
    /// Non-fatal problems to show the user
    pub warnings: Vec<String>,
}

impl<T> CommandOutcome<T> {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn update(&self, kind: ViewKind) -> Option<&ViewUpdate> {
        self.updates.iter().find(|u| u.kind() == kind)
    }
}

/// Owns the collections and their persistence
pub struct Tracker<S> {
    store: S,
    state: AppState,
    filter: ExpenseFilter,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    warning_percent: f64,
    startup_warnings: Vec<String>,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Load with UUID ids and the system clock
    pub fn load(store: S) -> TrackerResult<Self> {
        Self::load_with(store, Box::new(UuidGenerator), Box::new(SystemClock))
    }

    /// Load with injected id generation and clock
    ///
    /// Fails only when the store cannot be read, or when an unreadable
    /// collection cannot be copied aside.
    pub fn load_with(
        store: S,
        ids: Box<dyn IdGenerator>,
        clock: Box<dyn Clock>,
    ) -> TrackerResult<Self> {
        let (state, startup_warnings) = AppState::load(&store)?;
        debug!(
            expenses = state.expenses.len(),
            categories = state.categories.len(),
            budgets = state.budgets.len(),
            "tracker loaded"
        );

        Ok(Self {
            store,
            state,
            filter: ExpenseFilter::default(),
            ids,
            clock,
            warning_percent: DEFAULT_WARNING_PERCENT,
            startup_warnings,
        })
    }

    /// Set the percentage at which budgets are flagged as a warning
    pub fn with_warning_percent(mut self, percent: f64) -> Self {
        self.warning_percent = percent;
        self
    }

    /// Warnings raised while loading (e.g. the category seed could not be saved)
    pub fn startup_warnings(&self) -> &[String] {
        &self.startup_warnings
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn filter(&self) -> &ExpenseFilter {
        &self.filter
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    pub fn categories(&self) -> &[Category] {
        &self.state.categories
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.state.budgets
    }

    // === Filter commands ===

    /// Replace the active filter
    pub fn set_filter(&mut self, filter: ExpenseFilter) -> CommandOutcome {
        self.filter = filter;
        self.outcome(
            (),
            &[ViewKind::Dashboard, ViewKind::Chart, ViewKind::Expenses],
            Vec::new(),
        )
    }

    /// Remove every filter clause
    pub fn clear_filter(&mut self) -> CommandOutcome {
        self.set_filter(ExpenseFilter::default())
    }

    // === Queries ===

    /// Expense list under the active filter, optionally narrowed by a search
    pub fn expense_rows(&self, search: Option<&str>) -> Vec<ExpenseRow> {
        expense_rows(
            &self.state.expenses,
            &self.state.categories,
            &self.filter,
            search,
        )
    }

    pub fn dashboard(&self) -> DashboardView {
        DashboardView::generate(
            &self.state.expenses,
            &self.state.categories,
            &self.state.budgets,
            &self.filter,
            self.clock.today(),
        )
    }

    pub fn chart(&self) -> ChartSeries {
        ChartSeries::from_breakdown(&self.dashboard().breakdown)
    }

    pub fn budget_rows(&self) -> Vec<BudgetRow> {
        BudgetRow::generate_all(
            &self.state.budgets,
            &self.state.categories,
            &self.state.expenses,
            self.clock.today(),
            self.warning_percent,
        )
    }

    /// Compute one view
    pub fn view(&self, kind: ViewKind) -> ViewUpdate {
        match kind {
            ViewKind::Expenses => ViewUpdate::Expenses(self.expense_rows(None)),
            ViewKind::Categories => ViewUpdate::Categories(self.state.categories.clone()),
            ViewKind::Budgets => ViewUpdate::Budgets(self.budget_rows()),
            ViewKind::Dashboard => ViewUpdate::Dashboard(self.dashboard()),
            ViewKind::Chart => ViewUpdate::Chart(self.chart()),
        }
    }

    // === Internals shared by the entity commands ===

    pub(crate) fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub(crate) fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    /// Draw ids until one satisfies `is_free`
    pub(crate) fn fresh_id(&mut self, is_free: impl Fn(&AppState, &str) -> bool) -> String {
        loop {
            let id = self.ids.next_id();
            if is_free(&self.state, &id) {
                return id;
            }
            debug!(id = %id, "generated id already in use, drawing another");
        }
    }

    /// Persist collections and collect any write warnings
    pub(crate) fn persist(&self, collections: &[Collection]) -> Vec<String> {
        let mut warnings = Vec::new();
        self.state.persist(&self.store, collections, &mut warnings);
        warnings
    }

    pub(crate) fn outcome<T>(
        &self,
        value: T,
        views: &[ViewKind],
        warnings: Vec<String>,
    ) -> CommandOutcome<T> {
        CommandOutcome {
            value,
            updates: views.iter().map(|&kind| self.view(kind)).collect(),
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money};
    use crate::services::{ExpenseInput, FixedClock, SequentialIds};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tracker(store: &MemoryStore) -> Tracker<&MemoryStore> {
        Tracker::load_with(
            store,
            Box::new(SequentialIds::new("t")),
            Box::new(FixedClock::on(date(2025, 1, 31))),
        )
        .unwrap()
    }

    fn add(tracker: &mut Tracker<&MemoryStore>, amount: &str, category: &str, on: NaiveDate) {
        tracker
            .add_expense(ExpenseInput {
                amount: amount.into(),
                description: "x".into(),
                category: category.into(),
                date: on,
            })
            .unwrap();
    }

    #[test]
    fn test_filter_drives_dashboard_and_list() {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);
        add(&mut tracker, "100", "1", date(2025, 1, 5));
        add(&mut tracker, "50", "1", date(2025, 1, 20));
        add(&mut tracker, "30", "2", date(2025, 2, 1));

        let outcome = tracker.set_filter(
            ExpenseFilter::between(Some(date(2025, 1, 1)), Some(date(2025, 1, 31)))
                .with_category(Some(CategoryId::new("1"))),
        );

        match outcome.update(ViewKind::Dashboard) {
            Some(ViewUpdate::Dashboard(view)) => {
                assert_eq!(view.total, Money::from_units(150));
                assert_eq!(view.breakdown.len(), 1);
                assert_eq!(view.breakdown[0].name, "Food");
            }
            other => panic!("expected dashboard update, got {:?}", other),
        }
        assert_eq!(tracker.expense_rows(None).len(), 2);

        tracker.clear_filter();
        assert_eq!(tracker.expense_rows(None).len(), 3);
        assert_eq!(tracker.dashboard().total, Money::from_units(180));
    }

    #[test]
    fn test_chart_follows_breakdown_order() {
        let store = MemoryStore::new();
        let mut tracker = tracker(&store);
        add(&mut tracker, "10", "Fuel", date(2025, 1, 2));
        add(&mut tracker, "40", "Bills", date(2025, 1, 3));

        let chart = tracker.chart();
        assert_eq!(chart.labels, vec!["Bills", "Fuel"]);
        assert_eq!(chart.colors, vec!["#6366f1", "#f59e0b"]);
    }

    #[test]
    fn test_startup_warning_from_failing_store() {
        let store = MemoryStore::failing();
        let tracker = tracker(&store);
        assert_eq!(tracker.startup_warnings().len(), 1);
        assert_eq!(tracker.categories().len(), 10);
    }
}

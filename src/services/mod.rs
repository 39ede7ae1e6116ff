//! Service layer for the expense tracker
//!
//! The [`Tracker`] owns the application state and exposes commands
//! (validate, mutate, persist, report the views to re-render) and queries
//! over it. Entity commands are split by record type.

pub mod budget;
pub mod category;
pub mod clock;
pub mod expense;
pub mod id_gen;
pub mod state;
pub mod tracker;

pub use budget::BudgetInput;
pub use category::{CategoryInput, DeletedCategory};
pub use clock::{Clock, FixedClock, SystemClock};
pub use expense::ExpenseInput;
pub use id_gen::{IdGenerator, SequentialIds, UuidGenerator};
pub use state::{AppState, Collection, STORAGE_WARNING};
pub use tracker::{CommandOutcome, Tracker, ViewKind, ViewUpdate, DEFAULT_WARNING_PERCENT};

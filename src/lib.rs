//! Expense Tracker - personal expense tracking from the terminal
//!
//! This library records expenses against user-defined categories, tracks
//! spending against overall and per-category budgets, and derives the
//! figures shown on the dashboard, chart, budget list and expense list.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, budgets, filter)
//! - `storage`: Key-value persistence of the three collections
//! - `reports`: Aggregation engine and view-models
//! - `services`: The [`services::Tracker`] command/query interface
//! - `display`: Plain-text rendering of view-models
//! - `export`: CSV, JSON and YAML export
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{Settings, TrackerPaths};
//! use expense_tracker::services::{ExpenseInput, Tracker};
//! use expense_tracker::storage::JsonFileStore;
//!
//! let paths = TrackerPaths::new()?;
//! let mut tracker = Tracker::load(JsonFileStore::new(paths.data_dir()))?;
//! tracker.add_expense(ExpenseInput {
//!     amount: "120.50".into(),
//!     description: "Lunch".into(),
//!     category: "Food".into(),
//!     date: chrono::Local::now().date_naive(),
//! })?;
//! println!("{:?}", tracker.dashboard());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};

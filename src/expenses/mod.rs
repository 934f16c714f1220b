//! Expense tracking module.
//!
//! This module contains the core expense logic including:
//! - `Expense` - The expense record and its big-expense flag
//! - `Store` - Whole-list snapshot persistence and id allocation
//! - `CsvBridge` - CSV import and export
//! - `report` - Table rendering with totals
//! - `ExpenseTracker` - The operations behind each CLI command
//! - `Error` types - I/O, validation and per-row parse errors

mod config;
mod csv_bridge;
mod error;
mod expense;
mod report;
mod store;
mod tracker;

pub use rust_decimal::Decimal;

pub use config::{Config, DEFAULT_EXPORT_FILE, DEFAULT_IMPORT_FILE, DEFAULT_SNAPSHOT_FILE};
pub use csv_bridge::{read_expenses, write_expenses, CsvBridge, ImportReport, RejectedRow};
pub use error::{Error, ParseError, ValidationError};
pub use expense::{Expense, ExpenseId, BIG_EXPENSE_THRESHOLD};
pub use report::{render, render_report, total};
pub use store::{add_expense, next_id, Store};
pub use tracker::{CsvExport, ExpenseTracker, ImportDecision, ImportOutcome};

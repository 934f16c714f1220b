//! A small personal expense tracker.
//!
//! Expenses live in a whole-file snapshot, can be reported as a table, and can
//! be imported from or exported to CSV.

pub mod expenses;

pub use expenses::{
    Config, CsvBridge, CsvExport, Decimal, Error, Expense, ExpenseId, ExpenseTracker,
    ImportDecision, ImportOutcome, ImportReport, ParseError, Store, ValidationError,
};

use super::config::Config;
use super::csv_bridge::{CsvBridge, ImportReport};
use super::error::Error;
use super::expense::Expense;
use super::report::{render, render_report};
use super::store::{add_expense, Store};
use super::Decimal;

/// The answer given to "append imported expenses?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportDecision {
    Confirm,
    Decline,
    /// Anything other than y/n; treated as a cancellation
    Unrecognized,
}

impl ImportDecision {
    /// Interpret a typed answer: `y` confirms, `n` declines (case-insensitive).
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" => ImportDecision::Confirm,
            "n" => ImportDecision::Decline,
            _ => ImportDecision::Unrecognized,
        }
    }
}

/// What happened to an import batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Merged { added: usize },
    Cancelled,
    InvalidChoice,
}

/// Result of `export-csv`: the table shown to the user and whether the file was written.
#[derive(Debug)]
pub struct CsvExport {
    pub rendered: String,
    pub written: Result<(), Error>,
}

/// Entry points behind every CLI command.
///
/// Each call loads the store fresh, works on the in-memory list, and saves the
/// whole list back only when it changed.
#[derive(Debug, Clone)]
pub struct ExpenseTracker {
    store: Store,
    csv: CsvBridge,
}

impl ExpenseTracker {
    pub fn new(config: &Config) -> Self {
        log::trace!("ExpenseTracker initialized with {config:?}");
        Self {
            store: Store::new(&config.snapshot_path),
            csv: CsvBridge::new(&config.import_path, &config.export_path),
        }
    }

    pub fn csv(&self) -> &CsvBridge {
        &self.csv
    }

    /// Render the stored expenses, optionally only the big ones.
    pub fn report(&self, big_only: bool) -> Result<String, Error> {
        let expenses = self.store.load()?;
        Ok(render_report(&expenses, big_only))
    }

    /// Validate and persist one new expense.
    /// On a validation error nothing is written.
    pub fn add(&self, value: Decimal, description: &str) -> Result<Expense, Error> {
        let mut expenses = self.store.load()?;
        let expense = add_expense(&mut expenses, value, description)?;
        self.store.save(&expenses)?;

        log::info!("Added {expense}");
        Ok(expense)
    }

    /// Read the import CSV against the current store. Nothing is written.
    pub fn import_preview(&self) -> Result<ImportReport, Error> {
        let existing = self.store.load()?;
        self.csv.import(&existing)
    }

    /// Append `imported` to the store if the user confirmed.
    pub fn commit_import(
        &self,
        imported: Vec<Expense>,
        decision: ImportDecision,
    ) -> Result<ImportOutcome, Error> {
        match decision {
            ImportDecision::Confirm => {
                let mut expenses = self.store.load()?;
                let added = imported.len();
                expenses.extend(imported);
                self.store.save(&expenses)?;

                log::info!("Merged {added} imported expenses into the store");
                Ok(ImportOutcome::Merged { added })
            }
            ImportDecision::Decline => Ok(ImportOutcome::Cancelled),
            ImportDecision::Unrecognized => Ok(ImportOutcome::InvalidChoice),
        }
    }

    /// Render the stored expenses and write them to the export CSV.
    /// A failed write is carried in [`CsvExport::written`]; the rendering is kept.
    pub fn export_to_csv(&self) -> Result<CsvExport, Error> {
        let expenses = self.store.load()?;
        let rendered = render(&expenses);
        let written = self.csv.export(&expenses);
        if let Err(e) = &written {
            log::warn!(
                "Export to {} failed: {e}",
                self.csv.export_path().display()
            );
        }
        Ok(CsvExport { rendered, written })
    }

    /// Debug rendering of the stored records.
    pub fn dump_raw(&self) -> Result<String, Error> {
        let expenses = self.store.load()?;
        Ok(format!("{expenses:#?}"))
    }
}

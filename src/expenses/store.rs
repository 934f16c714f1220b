use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::PathBuf;

use super::error::{Error, ValidationError};
use super::expense::{Expense, ExpenseId};
use super::Decimal;

/// Whole-list snapshot persistence for expenses.
///
/// Every `save` replaces the full file; there is no per-record update.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the snapshot, treating a missing or incomplete file as an empty list.
    pub fn load(&self) -> Result<Vec<Expense>, Error> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No snapshot at {}, starting fresh", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let expenses = Self::load_from(file)?;
        log::debug!(
            "Loaded {} expenses from {}",
            expenses.len(),
            self.path.display()
        );
        Ok(expenses)
    }

    /// Read a snapshot from any source.
    /// An empty or truncated snapshot yields an empty list; malformed content is an error.
    pub fn load_from<R: Read>(reader: R) -> Result<Vec<Expense>, Error> {
        match serde_json::from_reader(BufReader::new(reader)) {
            Ok(expenses) => Ok(expenses),
            Err(e) if e.is_eof() => {
                log::warn!("Snapshot is empty or incomplete ({e}), starting fresh");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the snapshot with `expenses`.
    ///
    /// The list is written to a sibling `.tmp` file first and then renamed over
    /// the snapshot, so a failed write leaves the previous snapshot in place.
    pub fn save(&self, expenses: &[Expense]) -> Result<(), Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        let written = File::create(&temp_path)
            .map_err(Error::from)
            .and_then(|file| Self::save_to(file, expenses))
            .and_then(|()| fs::rename(&temp_path, &self.path).map_err(Error::from));
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                log::debug!("Could not remove {}: {cleanup}", temp_path.display());
            }
            return Err(e);
        }

        log::debug!(
            "Saved {} expenses to {}",
            expenses.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Write a snapshot to any sink.
    pub fn save_to<W: Write>(writer: W, expenses: &[Expense]) -> Result<(), Error> {
        let mut writer = BufWriter::new(writer);
        serde_json::to_writer(&mut writer, expenses)?;
        writer.flush()?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

/// Smallest positive id not used by any of `expenses`.
pub fn next_id(expenses: &[Expense]) -> ExpenseId {
    let taken: HashSet<ExpenseId> = expenses.iter().map(Expense::id).collect();
    lowest_free_id(&taken)
}

pub(super) fn lowest_free_id(taken: &HashSet<ExpenseId>) -> ExpenseId {
    let mut candidate = 1;
    while taken.contains(&candidate) {
        candidate += 1;
    }
    candidate
}

/// Validate and append a new expense, returning a copy of the stored record.
///
/// The amount must be positive; the description is checked by [`Expense::new`].
/// `expenses` is untouched on error.
pub fn add_expense(
    expenses: &mut Vec<Expense>,
    value: Decimal,
    description: &str,
) -> Result<Expense, ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount { amount: value });
    }

    let expense = Expense::new(next_id(expenses), description, value)?;
    log::trace!("Adding {expense}");
    expenses.push(expense.clone());
    Ok(expense)
}

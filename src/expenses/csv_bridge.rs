use std::collections::HashSet;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::StringRecord;
use serde::Serialize;

use super::error::{Error, ParseError};
use super::expense::{Expense, ExpenseId};
use super::store::lowest_free_id;
use super::Decimal;

/// One row of the export file. Field names double as the CSV header.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: ExpenseId,
    amount: Decimal,
    description: &'a str,
    big: bool,
}

impl<'a> From<&'a Expense> for ExportRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id(),
            amount: expense.value(),
            description: expense.description(),
            big: expense.is_pricey(),
        }
    }
}

/// An import row that was skipped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based data row number (the header is not counted)
    pub row: usize,
    pub fields: Vec<String>,
    pub error: ParseError,
}

impl std::fmt::Display for RejectedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in row {} {:?}: {}", self.row, self.fields, self.error)
    }
}

/// Result of reading an import CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: Vec<Expense>,
    pub rejected: Vec<RejectedRow>,
    /// The source file did not exist
    pub source_missing: bool,
}

impl ImportReport {
    fn missing_source() -> Self {
        Self {
            source_missing: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.imported.is_empty()
    }
}

/// Reads expenses from the import CSV and writes them to the export CSV.
#[derive(Debug, Clone)]
pub struct CsvBridge {
    import_path: PathBuf,
    export_path: PathBuf,
}

impl CsvBridge {
    pub fn new(import_path: impl Into<PathBuf>, export_path: impl Into<PathBuf>) -> Self {
        Self {
            import_path: import_path.into(),
            export_path: export_path.into(),
        }
    }

    pub fn import_path(&self) -> &Path {
        &self.import_path
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// Read the import file. Ids are allocated so they never collide with `existing`.
    /// A missing file gives an empty report flagged `source_missing`.
    pub fn import(&self, existing: &[Expense]) -> Result<ImportReport, Error> {
        let file = match File::open(&self.import_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!("CSV file not found: {}", self.import_path.display());
                return Ok(ImportReport::missing_source());
            }
            Err(e) => return Err(e.into()),
        };

        log::info!("Importing expenses from {}", self.import_path.display());
        read_expenses(file, existing)
    }

    /// Overwrite the export file with `expenses`.
    pub fn export(&self, expenses: &[Expense]) -> Result<(), Error> {
        let file = File::create(&self.export_path)?;
        write_expenses(file, expenses)?;
        log::info!(
            "Exported {} expenses to {}",
            expenses.len(),
            self.export_path.display()
        );
        Ok(())
    }
}

/// Parse import rows from any source.
///
/// The first row is always treated as a header. Each remaining row is read
/// positionally as `amount, description, ...`; trailing columns are ignored.
/// Bad rows are logged and collected in [`ImportReport::rejected`], they never
/// abort the import. Only an I/O failure while reading does.
/// Note that the CSV reader is buffered automatically, so you should not wrap `reader` in a `BufReader`.
pub fn read_expenses<R: Read>(reader: R, existing: &[Expense]) -> Result<ImportReport, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut taken: HashSet<ExpenseId> = existing.iter().map(Expense::id).collect();
    let mut report = ImportReport::default();

    for (index, result) in csv_reader.records().enumerate() {
        let row = index + 1;
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                log::warn!("[row {row}] - Skipped: {e}");
                report.rejected.push(RejectedRow {
                    row,
                    fields: Vec::new(),
                    error: ParseError::Malformed(e.to_string()),
                });
                continue;
            }
        };

        log::trace!("[row {row}] Parsing: {record:?}");

        let parsed = parse_row(&record).and_then(|(value, description)| {
            Expense::new(lowest_free_id(&taken), description, value)
                .map_err(|_| ParseError::MissingDescription)
        });

        match parsed {
            Ok(expense) => {
                taken.insert(expense.id());
                report.imported.push(expense);
            }
            Err(error) => {
                log::warn!("[row {row}] - Skipped: {error}");
                report.rejected.push(RejectedRow {
                    row,
                    fields: record.iter().map(str::to_owned).collect(),
                    error,
                });
            }
        }
    }

    log::info!(
        "Import complete: {} imported, {} skipped",
        report.imported.len(),
        report.rejected.len()
    );
    Ok(report)
}

/// Write the export CSV (`id,amount,description,big`) to any sink.
/// Note that the CSV writer is buffered automatically, so you should not wrap `writer` in a `BufWriter`.
pub fn write_expenses<W: Write>(writer: W, expenses: &[Expense]) -> Result<(), Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if expenses.is_empty() {
        // serialize() only emits the header alongside the first row
        csv_writer.write_record(["id", "amount", "description", "big"])?;
    }
    for expense in expenses {
        csv_writer.serialize(ExportRow::from(expense))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn parse_row(record: &StringRecord) -> Result<(Decimal, &str), ParseError> {
    let raw_amount = record
        .get(0)
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .ok_or(ParseError::MissingAmount)?;
    let value = parse_amount(raw_amount)?;

    let description = record
        .get(1)
        .map(str::trim)
        .filter(|description| !description.is_empty())
        .ok_or(ParseError::MissingDescription)?;

    Ok((value, description))
}

fn parse_amount(raw: &str) -> Result<Decimal, ParseError> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| ParseError::InvalidAmount {
            raw: raw.to_owned(),
        })
}

use crate::expenses::Decimal;

/// Top-level error type for the expense tracker.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Rejections on the record construction and "add" paths.
/// Nothing is persisted when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Description cannot be empty.")]
    EmptyDescription,

    #[error("The amount must be positive, got {amount}.")]
    NonPositiveAmount { amount: Decimal },
}

/// Soft per-row errors during CSV import.
/// These don't stop the import, the row is logged and skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Missing amount column")]
    MissingAmount,

    #[error("Invalid amount {raw:?}")]
    InvalidAmount { raw: String },

    #[error("Missing description in the row")]
    MissingDescription,

    #[error("Malformed row: {0}")]
    Malformed(String),
}

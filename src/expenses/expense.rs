use super::error::ValidationError;
use super::Decimal;
use serde::{Deserialize, Serialize};

pub type ExpenseId = u32;

/// Amounts at or above this are flagged as big expenses.
pub const BIG_EXPENSE_THRESHOLD: Decimal = Decimal::ONE_THOUSAND;

/// A single expense entry.
///
/// `pricey` is decided once, when the record is created, and travels with the
/// record from then on. Loading a snapshot does not re-run any validation, so
/// records written by older builds (or imported from CSV) may carry a negative
/// value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Expense {
    id: ExpenseId,
    description: String,
    value: Decimal,
    pricey: bool,
}

impl Expense {
    /// Build a record, rejecting a blank description.
    ///
    /// The value sign is not checked here; that belongs to the "add" path.
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        value: Decimal,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        Ok(Self {
            id,
            description,
            value,
            pricey: value >= BIG_EXPENSE_THRESHOLD,
        })
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns whether this was a big expense when it was recorded
    pub fn is_pricey(&self) -> bool {
        self.pricey
    }
}

impl std::fmt::Display for Expense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[expense] id={} value={} pricey={} description={:?}",
            self.id, self.value, self.pricey, self.description
        )
    }
}

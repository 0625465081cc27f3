use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{LedgerError, Result};

/// One income or expense entry in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub id: Uuid,
    pub kind: RecordKind,
    pub amount: Decimal,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Direction of a record's effect on the balance. `amount` is always
/// positive; the sign comes from the kind alone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

impl Record {
    /// Signed contribution of this record to a balance.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            RecordKind::Income => self.amount,
            RecordKind::Expense => -self.amount,
        }
    }
}

/// Rejects candidate field values that would break the record invariants.
pub(crate) fn validate_fields(amount: Decimal, category: &str) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidRecord(format!(
            "amount must be positive, got {amount}"
        )));
    }
    if category.trim().is_empty() {
        return Err(LedgerError::InvalidRecord(
            "category must not be empty".into(),
        ));
    }
    Ok(())
}

/// Candidate record handed to [`LedgerStore::add`]. The store assigns the id;
/// a missing timestamp defaults to the current time.
///
/// [`LedgerStore::add`]: crate::ledger::LedgerStore::add
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub kind: RecordKind,
    pub amount: Decimal,
    pub category: String,
    pub description: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl RecordDraft {
    pub fn new(kind: RecordKind, amount: Decimal, category: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            description: None,
            timestamp: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_fields(self.amount, &self.category)
    }

    /// Materializes the draft, assigning a fresh id. [`LedgerStore::add`]
    /// validates first; callers holding a bare draft should too.
    ///
    /// [`LedgerStore::add`]: crate::ledger::LedgerStore::add
    pub fn into_record(self) -> Record {
        Record {
            id: Uuid::new_v4(),
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            description: self.description,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
        }
    }
}

/// Partial update for [`LedgerStore::edit`]. Unset fields keep their current
/// value; the merged result is validated before it replaces the original.
///
/// [`LedgerStore::edit`]: crate::ledger::LedgerStore::edit
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    kind: Option<RecordKind>,
    amount: Option<Decimal>,
    category: Option<String>,
    description: Option<Option<String>>,
    timestamp: Option<DateTime<Utc>>,
}

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: RecordKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Merges the patch over `current`, keeping its id.
    pub(crate) fn apply(&self, current: &Record) -> Record {
        Record {
            id: current.id,
            kind: self.kind.unwrap_or(current.kind),
            amount: self.amount.unwrap_or(current.amount),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| current.category.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
            timestamp: self.timestamp.unwrap_or(current.timestamp),
        }
    }
}

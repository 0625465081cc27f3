use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::{LedgerError, Result};
use crate::storage::{JsonStorage, StorageBackend};

use super::filter::RecordFilter;
use super::record::{validate_fields, Record, RecordDraft, RecordPatch};

/// Where the ledger lives on disk and whether a missing file may be created.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub create_if_missing: bool,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_if_missing: false,
        }
    }

    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }
}

/// In-memory authoritative collection of records plus validation and query
/// logic. Every successful mutation is flushed to disk before it returns; a
/// failed flush rolls the mutation back, so memory and file never diverge.
pub struct LedgerStore {
    config: StoreConfig,
    records: Vec<Record>,
    backend: Box<dyn StorageBackend>,
}

impl std::fmt::Debug for LedgerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerStore")
            .field("config", &self.config)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

impl LedgerStore {
    /// Opens the ledger file named by `config`, creating an empty one first
    /// when `create_if_missing` is set.
    pub fn open(config: StoreConfig) -> Result<Self> {
        Self::open_with_backend(config, Box::new(JsonStorage))
    }

    pub fn open_with_backend(config: StoreConfig, backend: Box<dyn StorageBackend>) -> Result<Self> {
        if !config.path.exists() && config.create_if_missing {
            backend.create(&config.path)?;
        }
        let records = backend.load(&config.path)?;
        tracing::debug!(path = %config.path.display(), count = records.len(), "ledger loaded");
        Ok(Self {
            config,
            records,
            backend,
        })
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validates the draft, assigns a fresh id, appends and flushes.
    pub fn add(&mut self, draft: RecordDraft) -> Result<Record> {
        draft.validate()?;
        let record = draft.into_record();
        self.records.push(record.clone());
        if let Err(err) = self.flush() {
            self.records.pop();
            return Err(err);
        }
        tracing::debug!(id = %record.id, "record added");
        Ok(record)
    }

    /// Replaces the record in place (same id, same position) with the merged
    /// result of `patch`, after validating it.
    pub fn edit(&mut self, id: Uuid, patch: RecordPatch) -> Result<Record> {
        let index = self.position(id)?;
        let merged = patch.apply(&self.records[index]);
        validate_fields(merged.amount, &merged.category)?;
        let previous = std::mem::replace(&mut self.records[index], merged.clone());
        if let Err(err) = self.flush() {
            self.records[index] = previous;
            return Err(err);
        }
        tracing::debug!(id = %id, "record edited");
        Ok(merged)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);
        if let Err(err) = self.flush() {
            self.records.insert(index, removed);
            return Err(err);
        }
        tracing::debug!(id = %id, "record deleted");
        Ok(())
    }

    /// Owned copy of a single record, if present.
    pub fn get(&self, id: Uuid) -> Option<Record> {
        self.records.iter().find(|record| record.id == id).cloned()
    }

    /// Iterates records in insertion order, optionally filtered. The iterator
    /// borrows the store; call again to restart.
    pub fn list<'a>(
        &'a self,
        filter: Option<&'a RecordFilter>,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.records
            .iter()
            .filter(move |record| filter.map_or(true, |f| f.matches(record)))
    }

    /// Income total minus expense total over the (filtered) set; zero when
    /// nothing matches.
    pub fn balance(&self, filter: Option<&RecordFilter>) -> Decimal {
        self.list(filter).map(Record::signed_amount).sum()
    }

    fn position(&self, id: Uuid) -> Result<usize> {
        self.records
            .iter()
            .position(|record| record.id == id)
            .ok_or(LedgerError::NotFound(id))
    }

    fn flush(&self) -> Result<()> {
        self.backend.save(&self.config.path, &self.records)
    }
}

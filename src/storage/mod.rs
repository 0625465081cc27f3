pub mod json_backend;

use std::path::Path;

use crate::errors::Result;
use crate::ledger::Record;

/// Abstraction over persistence backends capable of storing the record
/// collection. The ledger store drives it; tests may substitute a failing
/// implementation to exercise rollback.
pub trait StorageBackend: Send + Sync {
    /// Reads the full collection. Fails with `MissingFile` when nothing has
    /// been persisted at `path`, or `CorruptData` when the file cannot be
    /// parsed.
    fn load(&self, path: &Path) -> Result<Vec<Record>>;

    /// Initializes an empty store at `path`. A no-op when a valid store
    /// already exists; never overwrites existing content.
    fn create(&self, path: &Path) -> Result<()>;

    /// Replaces the persisted collection with `records`, atomically.
    fn save(&self, path: &Path, records: &[Record]) -> Result<()>;
}

pub use json_backend::JsonStorage;

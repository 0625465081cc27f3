use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid record: {0}")]
    InvalidRecord(String),
    #[error("no record with id {0}")]
    NotFound(Uuid),
    #[error("ledger file not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("corrupt ledger file {}: {source}", .path.display())]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("persistence failure: {0}")]
    Persistence(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

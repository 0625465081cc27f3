//! Ledger domain model: records, filters, and the authoritative store.

pub mod filter;
pub mod record;
pub mod store;

pub use filter::RecordFilter;
pub use record::{Record, RecordDraft, RecordKind, RecordPatch};
pub use store::{LedgerStore, StoreConfig};

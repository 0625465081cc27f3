#![doc(test(attr(deny(warnings))))]

//! Ledger Core is a personal income/expense ledger: an in-memory record
//! store with validation and balance queries, kept consistent with a single
//! JSON file through atomic-replace writes. The terminal menu in [`cli`]
//! drives it interactively.

pub mod cli;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Core tracing initialized.");
    });
}

//! Terminal menu that drives the ledger store. The store owns all
//! validation and persistence; this layer only collects input and renders
//! results.

mod io;
mod menus;

use std::path::PathBuf;

use thiserror::Error;

use crate::errors::LedgerError;
use crate::ledger::{LedgerStore, StoreConfig};

pub use io::{CliMode, SCRIPT_ENV};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Options resolved from the command line.
#[derive(Debug, Clone)]
pub struct CliOptions {
    pub path: PathBuf,
    pub create: bool,
}

/// Opens the ledger file and runs the menu session until the user quits.
pub fn run_cli(options: CliOptions) -> Result<(), CliError> {
    let mode = io::detect_mode();
    let config = StoreConfig::new(options.path).create_if_missing(options.create);
    let mut store = LedgerStore::open(config)?;
    menus::run(&mut store, mode)
}

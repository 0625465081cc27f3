use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::errors::{LedgerError, Result};
use crate::ledger::Record;

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";
const EMPTY_STORE: &str = "[]";

/// Stores the record collection as a pretty-printed JSON array. Writes stage
/// to a temporary file and rename over the destination, so the previous
/// content survives any failure mid-write.
pub struct JsonStorage;

impl StorageBackend for JsonStorage {
    fn load(&self, path: &Path) -> Result<Vec<Record>> {
        if !path.exists() {
            return Err(LedgerError::MissingFile(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|source| LedgerError::CorruptData {
            path: path.to_path_buf(),
            source,
        })
    }

    fn create(&self, path: &Path) -> Result<()> {
        if path.exists() {
            // Existing content is validated, never replaced.
            self.load(path)?;
            return Ok(());
        }
        write_atomic(path, EMPTY_STORE)?;
        tracing::info!(path = %path.display(), "created empty ledger file");
        Ok(())
    }

    fn save(&self, path: &Path, records: &[Record]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        write_atomic(path, &json)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = tmp_path(path);
    if let Err(err) = stage_and_swap(&tmp, path, data) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    Ok(())
}

// Any failure here leaves the staging file behind; the caller removes it.
fn stage_and_swap(tmp: &Path, path: &Path, data: &str) -> io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    fs::rename(tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{RecordDraft, RecordKind};
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn sample_records() -> Vec<Record> {
        vec![
            RecordDraft::new(RecordKind::Income, dec!(100), "salary").into_record(),
            RecordDraft::new(RecordKind::Expense, dec!(40.25), "groceries")
                .with_description("weekly shop")
                .into_record(),
        ]
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("ledger.json");
        let records = sample_records();
        JsonStorage.save(&path, &records).expect("save records");
        let loaded = JsonStorage.load(&path).expect("load records");
        assert_eq!(loaded, records);
    }

    #[test]
    fn create_initializes_empty_store() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("ledger.json");
        JsonStorage.create(&path).expect("create store");
        assert_eq!(fs::read_to_string(&path).unwrap(), EMPTY_STORE);
        assert!(JsonStorage.load(&path).unwrap().is_empty());
    }

    #[test]
    fn tmp_path_keeps_original_extension() {
        assert_eq!(
            tmp_path(Path::new("/data/ledger.json")),
            PathBuf::from("/data/ledger.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("/data/ledger")), PathBuf::from("/data/ledger.tmp"));
    }
}

//! JSON-file persistence of the record collection.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::models::record::{InvoiceRecord, RecordEdit};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// File-backed store of extracted records.
///
/// Every operation loads the full collection, mutates it, and writes it
/// back; the collections involved are small enough that this stays simple
/// and atomic per call.
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a store over the given file path. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records; a missing store file is an empty collection.
    pub fn load(&self) -> Result<Vec<InvoiceRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path).map_err(|e| StoreError::Read(e.to_string()))?;
        serde_json::from_str(&data).map_err(|e| StoreError::Read(e.to_string()))
    }

    /// Replace the stored collection.
    pub fn save(&self, records: &[InvoiceRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Write(e.to_string()))?;
            }
        }
        let data = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Write(e.to_string()))?;
        fs::write(&self.path, data).map_err(|e| StoreError::Write(e.to_string()))?;
        debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }

    /// Append records to the stored collection, returning the new total.
    pub fn append(&self, new: Vec<InvoiceRecord>) -> Result<usize> {
        let mut records = self.load()?;
        records.extend(new);
        self.save(&records)?;
        Ok(records.len())
    }

    /// Replace the editable fields of the record with the given id and
    /// return the patched record.
    pub fn patch(&self, id: &str, edit: &RecordEdit) -> Result<InvoiceRecord> {
        let mut records = self.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::UnknownId(id.to_string()))?;
        record.apply_edit(edit);
        let patched = record.clone();
        self.save(&records)?;
        Ok(patched)
    }

    /// Delete the record with the given id.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(StoreError::UnknownId(id.to_string()));
        }
        self.save(&records)
    }

    /// Remove the store file entirely.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| StoreError::Write(e.to_string()))?;
        }
        Ok(())
    }

    /// Whether a store file exists on disk.
    pub fn has_data(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::VoucherType;
    use pretty_assertions::assert_eq;

    fn record(invoice_number: &str) -> InvoiceRecord {
        InvoiceRecord {
            id: InvoiceRecord::generate_id(),
            date: "05/03/2024".to_string(),
            client_name: "MR. RAMESH KUMAR".to_string(),
            number: "9876543210".to_string(),
            product_line: "TILES".to_string(),
            disc_offered: "0%".to_string(),
            voucher_type: VoucherType::Sales,
            invoice_number: invoice_number.to_string(),
            amount: 100,
            sold_by: String::new(),
            source: String::new(),
            source_name: String::new(),
            sale_type: String::new(),
            file_name: "a.pdf".to_string(),
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> RecordStore {
        RecordStore::new(dir.path().join("records.json"))
    }

    #[test]
    fn test_missing_file_is_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(!store.has_data());
        assert_eq!(store.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let records = vec![record("A / 1"), record("B / 2")];
        store.save(&records).unwrap();

        assert!(store.has_data());
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_append_extends_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.append(vec![record("A / 1")]).unwrap(), 1);
        assert_eq!(store.append(vec![record("B / 2"), record("C / 3")]).unwrap(), 3);
        assert_eq!(store.load().unwrap().len(), 3);
    }

    #[test]
    fn test_patch_edits_only_named_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let records = vec![record("A / 1"), record("B / 2")];
        let target = records[1].id.clone();
        store.save(&records).unwrap();

        let edit = RecordEdit {
            sold_by: Some("Anita".to_string()),
            ..RecordEdit::default()
        };
        let patched = store.patch(&target, &edit).unwrap();
        assert_eq!(patched.sold_by, "Anita");

        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].sold_by, "");
        assert_eq!(loaded[1].sold_by, "Anita");
        assert_eq!(loaded[1].invoice_number, "B / 2");
    }

    #[test]
    fn test_patch_unknown_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&[record("A / 1")]).unwrap();

        let err = store.patch("nope", &RecordEdit::default()).unwrap_err();
        assert!(matches!(err, StoreError::UnknownId(_)));
    }

    #[test]
    fn test_delete_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let records = vec![record("A / 1"), record("B / 2")];
        let doomed = records[0].id.clone();
        store.save(&records).unwrap();

        store.delete(&doomed).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
        assert!(matches!(
            store.delete(&doomed).unwrap_err(),
            StoreError::UnknownId(_)
        ));

        store.clear().unwrap();
        assert!(!store.has_data());
        assert_eq!(store.load().unwrap(), Vec::new());
    }
}

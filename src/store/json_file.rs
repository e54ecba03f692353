//! JSON-file-backed [`EntryStore`].

use std::cmp::Reverse;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::Utc;
use serde_json::Value;
use tracing::{info, warn};

use crate::entry::{Entry, EntryId, NewEntry};

use super::{EntryStore, Snapshot, StoreError};

const TMP_EXTENSION: &str = "tmp";

/// Stores entries as a JSON array in a single file.
///
/// A missing file reads as an empty store. Records that fail to decode
/// are skipped from snapshots with a recorded count, but are kept on
/// disk across other writes so a bad record is never silently destroyed.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<Value>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&raw).map_err(StoreError::Corrupt)
    }

    fn save(&self, records: &[Value]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(records).map_err(StoreError::Encode)?;
        let tmp = self.path.with_extension(TMP_EXTENSION);
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        info!(
            records = records.len(),
            path = %self.path.display(),
            "entry store saved"
        );
        Ok(())
    }

    fn snapshot(records: &[Value]) -> Snapshot {
        let mut entries = Vec::with_capacity(records.len());
        let mut skipped = 0;
        for (index, record) in records.iter().enumerate() {
            match serde_json::from_value::<Entry>(record.clone()) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    skipped += 1;
                    warn!(index, %err, "skipping undecodable entry record");
                }
            }
        }
        entries.sort_by_key(|entry| Reverse(entry.created_at));
        Snapshot { entries, skipped }
    }
}

impl EntryStore for JsonFileStore {
    fn fetch_all(&self) -> Result<Snapshot, StoreError> {
        Ok(Self::snapshot(&self.load()?))
    }

    fn create(&mut self, draft: NewEntry) -> Result<(Entry, Snapshot), StoreError> {
        let mut records = self.load()?;
        let entry = draft.into_entry(EntryId::random(), Utc::now().timestamp_millis());
        records.push(serde_json::to_value(&entry).map_err(StoreError::Encode)?);
        self.save(&records)?;
        Ok((entry, Self::snapshot(&records)))
    }

    fn delete(&mut self, id: &EntryId) -> Result<Snapshot, StoreError> {
        let mut records = self.load()?;
        let id_str = id.to_string();
        let position = records
            .iter()
            .position(|record| record.get("id").and_then(Value::as_str) == Some(id_str.as_str()))
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        records.remove(position);
        self.save(&records)?;
        Ok(Self::snapshot(&records))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::entry::EntryKind;

    use super::*;

    fn draft(title: &str) -> NewEntry {
        NewEntry::new(
            title,
            dec!(100),
            EntryKind::Expense,
            "2024-01-05".parse().unwrap(),
        )
        .unwrap()
    }

    fn record(title: &str, created_at: i64) -> Value {
        json!({
            "id": EntryId::random(),
            "title": title,
            "amount": "100",
            "kind": "expense",
            "date": "2024-01-05",
            "created_at": created_at,
        })
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("expenses.json"));
        let snapshot = store.fetch_all().unwrap();
        assert!(snapshot.entries.is_empty());
        assert_eq!(0, snapshot.skipped);
    }

    #[test]
    fn create_then_fetch_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("expenses.json"));
        let (entry, snapshot) = store.create(draft("Rent")).unwrap();
        assert_eq!("Rent", entry.title);
        assert_eq!(vec![entry.clone()], snapshot.entries);
        assert_eq!(vec![entry], store.fetch_all().unwrap().entries);
    }

    #[test]
    fn delete_removes_only_the_named_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("expenses.json"));
        let (first, _) = store.create(draft("Rent")).unwrap();
        let (second, _) = store.create(draft("Coffee")).unwrap();
        let snapshot = store.delete(&first.id).unwrap();
        assert_eq!(vec![second], snapshot.entries);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path().join("expenses.json"));
        store.create(draft("Rent")).unwrap();
        let result = store.delete(&EntryId::random());
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn undecodable_records_are_skipped_but_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.json");
        let records = json!([
            record("Rent", 1),
            {
                "id": "not-an-id",
                "title": "Bad",
                "amount": "not-a-number",
                "kind": "expense",
                "date": "not-a-date",
                "created_at": 2,
            },
        ]);
        fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

        let mut store = JsonFileStore::open(&path);
        let snapshot = store.fetch_all().unwrap();
        assert_eq!(1, snapshot.entries.len());
        assert_eq!(1, snapshot.skipped);

        // An unrelated mutation must not drop the bad record from disk.
        store.create(draft("Coffee")).unwrap();
        let on_disk: Vec<Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(3, on_disk.len());
    }

    #[test]
    fn corrupt_file_is_a_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.json");
        fs::write(&path, "not json at all").unwrap();
        let store = JsonFileStore::open(&path);
        let result = store.fetch_all();
        assert!(matches!(result, Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn snapshots_order_newest_first() {
        let records = vec![record("a", 1), record("b", 3), record("c", 2)];
        let snapshot = JsonFileStore::snapshot(&records);
        let titles: Vec<&str> = snapshot
            .entries
            .iter()
            .map(|entry| entry.title.as_str())
            .collect();
        assert_eq!(vec!["b", "c", "a"], titles);
    }
}

//! Entry persistence behind a storage-collaborator trait.

use thiserror::Error;

use crate::entry::{Entry, EntryId, NewEntry};

pub mod json_file;

/// A point-in-time view of the stored entries, newest first.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub entries: Vec<Entry>,
    /// Stored records that failed to decode and were left out.
    pub skipped: usize,
}

/// Storage collaborator for entries.
///
/// Mutations return the snapshot after the change; callers rebuild any
/// derived state from it rather than tracking increments. This is the
/// synchronous stand-in for a subscribe-for-changes channel.
pub trait EntryStore {
    /// One-shot fetch of the current snapshot.
    fn fetch_all(&self) -> Result<Snapshot, StoreError>;

    /// Stores a draft, assigning its id and creation timestamp, and
    /// returns the stored entry with the post-change snapshot.
    fn create(&mut self, draft: NewEntry) -> Result<(Entry, Snapshot), StoreError>;

    /// Deletes the entry with the given id and returns the post-change
    /// snapshot.
    fn delete(&mut self, id: &EntryId) -> Result<Snapshot, StoreError>;
}

/// Failures of the storage collaborator, reported to the caller as-is.
/// A failed fetch is never presented as an empty store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no entry with id {0}")]
    NotFound(EntryId),
    #[error("entry store is not a valid JSON array: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("failed to encode entry: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

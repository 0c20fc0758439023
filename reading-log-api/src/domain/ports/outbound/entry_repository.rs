use async_trait::async_trait;

use crate::domain::{
    models::{Entry, EntryFields, EntryId},
    EntryError,
};

/// Persistence for reading-log entries.
#[async_trait]
pub trait EntryRepository: Send + Sync + 'static {
    /// All stored entries, newest first.
    async fn list(&self) -> Result<Vec<Entry>, EntryError>;

    async fn contains(&self, id: &EntryId) -> Result<bool, EntryError>;

    /// Store a new entry in front of the existing ones.
    async fn insert(&self, entry: Entry) -> Result<(), EntryError>;

    /// Replace the editable fields of an entry, returning the stored result.
    async fn replace(&self, id: &EntryId, fields: EntryFields) -> Result<Entry, EntryError>;

    async fn remove(&self, id: &EntryId) -> Result<(), EntryError>;
}

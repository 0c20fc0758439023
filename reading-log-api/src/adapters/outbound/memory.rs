//! In-memory repository for testing.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::{
    models::{Entry, EntryFields, EntryId},
    ports::outbound::EntryRepository,
    EntryError,
};

/// Entry repository backed by a `Vec`, newest first.
#[derive(Clone, Default)]
pub struct InMemoryEntryRepository {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(self, entries: Vec<Entry>) -> Self {
        *self.entries.write().unwrap() = entries;
        self
    }

    pub fn snapshot(&self) -> Vec<Entry> {
        self.entries.read().unwrap().clone()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn list(&self) -> Result<Vec<Entry>, EntryError> {
        Ok(self.snapshot())
    }

    async fn contains(&self, id: &EntryId) -> Result<bool, EntryError> {
        Ok(self.entries.read().unwrap().iter().any(|entry| &entry.id == id))
    }

    async fn insert(&self, entry: Entry) -> Result<(), EntryError> {
        self.entries.write().unwrap().insert(0, entry);
        Ok(())
    }

    async fn replace(&self, id: &EntryId, fields: EntryFields) -> Result<Entry, EntryError> {
        let mut entries = self.entries.write().unwrap();
        let entry = entries
            .iter_mut()
            .find(|entry| &entry.id == id)
            .ok_or_else(|| EntryError::NotFound(id.clone()))?;
        entry.replace_fields(fields);
        Ok(entry.clone())
    }

    async fn remove(&self, id: &EntryId) -> Result<(), EntryError> {
        let mut entries = self.entries.write().unwrap();
        let before = entries.len();
        entries.retain(|entry| &entry.id != id);
        if entries.len() == before {
            return Err(EntryError::NotFound(id.clone()));
        }
        Ok(())
    }
}

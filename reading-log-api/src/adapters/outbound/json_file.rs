use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    models::{Entry, EntryFields, EntryId},
    ports::outbound::EntryRepository,
    EntryError,
};

/// Stores the whole reading log as a single pretty-printed JSON array.
///
/// Every mutation is a read-modify-write of the file, serialized by `lock`.
/// New content is written to a sibling temp file and renamed into place.
pub struct JsonFileEntryRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileEntryRepository {
    /// Open the log at `path`, creating parent directories and an empty log
    /// when nothing exists yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, EntryError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|err| {
                EntryError::storage(format!("failed to create {}: {err}", parent.display()))
            })?;
        }

        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::info!("creating empty reading log at {}", path.display());
            write_entries(&path, &[]).await?;
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    async fn read_all(&self) -> Result<Vec<Entry>, EntryError> {
        let raw = tokio::fs::read(&self.path).await.map_err(|err| {
            EntryError::storage(format!("failed to read {}: {err}", self.path.display()))
        })?;

        serde_json::from_slice(&raw).map_err(|err| {
            EntryError::storage(format!("failed to parse {}: {err}", self.path.display()))
        })
    }
}

async fn write_entries(path: &Path, entries: &[Entry]) -> Result<(), EntryError> {
    let json = serde_json::to_vec_pretty(entries)
        .map_err(|err| EntryError::storage(format!("failed to serialize entries: {err}")))?;

    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, json).await.map_err(|err| {
        EntryError::storage(format!("failed to write {}: {err}", tmp_path.display()))
    })?;
    tokio::fs::rename(&tmp_path, path).await.map_err(|err| {
        EntryError::storage(format!("failed to replace {}: {err}", path.display()))
    })
}

#[async_trait]
impl EntryRepository for JsonFileEntryRepository {
    async fn list(&self) -> Result<Vec<Entry>, EntryError> {
        let _guard = self.lock.lock().await;

        // An unreadable log lists as empty; mutations still fail on it so the
        // broken file is never overwritten.
        match self.read_all().await {
            Ok(entries) => Ok(entries),
            Err(err) => {
                tracing::error!("{err}, listing no entries");
                Ok(Vec::new())
            }
        }
    }

    async fn contains(&self, id: &EntryId) -> Result<bool, EntryError> {
        let _guard = self.lock.lock().await;

        Ok(self.read_all().await?.iter().any(|entry| &entry.id == id))
    }

    async fn insert(&self, entry: Entry) -> Result<(), EntryError> {
        let _guard = self.lock.lock().await;

        let mut entries = self.read_all().await?;
        entries.insert(0, entry);
        write_entries(&self.path, &entries).await
    }

    async fn replace(&self, id: &EntryId, fields: EntryFields) -> Result<Entry, EntryError> {
        let _guard = self.lock.lock().await;

        let mut entries = self.read_all().await?;
        let entry = entries
            .iter_mut()
            .find(|entry| &entry.id == id)
            .ok_or_else(|| EntryError::NotFound(id.clone()))?;
        entry.replace_fields(fields);
        let updated = entry.clone();

        write_entries(&self.path, &entries).await?;
        Ok(updated)
    }

    async fn remove(&self, id: &EntryId) -> Result<(), EntryError> {
        let _guard = self.lock.lock().await;

        let mut entries = self.read_all().await?;
        let before = entries.len();
        entries.retain(|entry| &entry.id != id);
        if entries.len() == before {
            return Err(EntryError::NotFound(id.clone()));
        }

        write_entries(&self.path, &entries).await
    }
}

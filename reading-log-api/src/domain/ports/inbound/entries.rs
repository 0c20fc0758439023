use async_trait::async_trait;

use crate::domain::{
    models::{Entry, EntryDraft, EntryId, Suggestions},
    EntryError,
};

#[async_trait]
pub trait EntryService: Send + Sync + 'static {
    /// Entries whose title or author contains `query`. An empty query lists everything.
    async fn search(&self, query: &str) -> Result<Vec<Entry>, EntryError>;

    async fn create(&self, draft: EntryDraft) -> Result<Entry, EntryError>;

    /// Full replace of an existing entry.
    async fn update(&self, id: &EntryId, draft: EntryDraft) -> Result<Entry, EntryError>;

    async fn delete(&self, id: &EntryId) -> Result<(), EntryError>;

    async fn suggestions(&self) -> Result<Suggestions, EntryError>;
}

mod client;
mod dev_backend;
mod dto;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{Entry, Suggestions};

pub use client::ApiClient;
pub use dev_backend::DevBackend;
pub use dto::{EntryPayload, MutationResponse};

/// The Entry API as seen by the client.
///
/// `Err` always means the request did not complete (transport failure or an
/// unreadable response). A server that rejects a mutation answers with
/// `Ok(MutationResponse { success: false, .. })`.
#[async_trait]
pub trait EntryApi: Send + Sync + 'static {
    /// GET /api/entries, with `?q=` only when `query` is non-empty.
    async fn list_entries(&self, query: Option<&str>) -> Result<Vec<Entry>>;

    async fn create_entry(&self, payload: &EntryPayload) -> Result<MutationResponse>;

    async fn update_entry(&self, id: &str, payload: &EntryPayload) -> Result<MutationResponse>;

    async fn delete_entry(&self, id: &str) -> Result<MutationResponse>;

    async fn autocomplete(&self) -> Result<Suggestions>;
}

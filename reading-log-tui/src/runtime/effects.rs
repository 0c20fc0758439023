use std::sync::Arc;
use std::time::Duration;

use super::events::{Event, EventTx};
use crate::api::{EntryApi, EntryPayload, MutationResponse};

/// How long a success status stays visible.
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(3);

/// Side effects requested by `update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// `None` requests the unfiltered list.
    LoadEntries { query: Option<String> },
    LoadSuggestions,
    CreateEntry(EntryPayload),
    UpdateEntry { id: String, payload: EntryPayload },
    DeleteEntry { id: String },
    ClearStatusAfter(Duration),
}

/// Spawns the effect as a task that posts its result back as an event.
/// Tasks are never cancelled and may finish in any order.
pub fn run_effect(effect: Effect, api: &Arc<dyn EntryApi>, event_tx: &EventTx) {
    let api = Arc::clone(api);
    let event_tx = event_tx.clone();

    tokio::spawn(async move {
        let event = perform(effect, api.as_ref()).await;
        let _ = event_tx.send(event);
    });
}

async fn perform(effect: Effect, api: &dyn EntryApi) -> Event {
    match effect {
        Effect::LoadEntries { query } => {
            let result = api.list_entries(query.as_deref()).await;
            Event::EntriesLoaded(result.map_err(|e| format!("{:#}", e)))
        }
        Effect::LoadSuggestions => {
            let result = api.autocomplete().await;
            Event::SuggestionsLoaded(result.map_err(|e| format!("{:#}", e)))
        }
        Effect::CreateEntry(payload) => {
            let result = api.create_entry(&payload).await;
            log_mutation("create", None, &result);
            Event::SubmitFinished(result.map_err(|e| format!("{:#}", e)))
        }
        Effect::UpdateEntry { id, payload } => {
            let result = api.update_entry(&id, &payload).await;
            log_mutation("update", Some(id.as_str()), &result);
            Event::SubmitFinished(result.map_err(|e| format!("{:#}", e)))
        }
        Effect::DeleteEntry { id } => {
            let result = api.delete_entry(&id).await;
            log_mutation("delete", Some(id.as_str()), &result);
            Event::DeleteFinished(result.map_err(|e| format!("{:#}", e)))
        }
        Effect::ClearStatusAfter(delay) => {
            tokio::time::sleep(delay).await;
            Event::ClearStatus
        }
    }
}

fn log_mutation(
    operation: &str,
    id: Option<&str>,
    result: &anyhow::Result<MutationResponse>,
) {
    match result {
        Ok(response) if response.success => {
            tracing::info!(operation, id, "entry {} succeeded", operation)
        }
        Ok(response) => tracing::warn!(
            operation,
            id,
            error = response.error.as_deref().unwrap_or_default(),
            "entry {} rejected",
            operation
        ),
        Err(e) => tracing::error!(operation, id, "entry {} failed: {:#}", operation, e),
    }
}

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, MutexGuard,
};

use super::dto::{EntryPayload, MutationResponse};
use super::EntryApi;
use crate::types::{Entry, Marker, Suggestions};

/// In-memory stand-in for reading-log-api, used by `reading-log dev` and by
/// runtime tests. Entries are kept newest-first like the real store.
#[derive(Debug, Clone)]
pub struct DevBackend {
    store: Arc<Mutex<Vec<Entry>>>,
    next_id: Arc<AtomicU64>,
}

impl DevBackend {
    pub fn new() -> Self {
        Self::with_entries(seed_dev_entries())
    }

    pub fn with_entries(entries: Vec<Entry>) -> Self {
        let next_id = entries.len() as u64 + 1;
        Self {
            store: Arc::new(Mutex::new(entries)),
            next_id: Arc::new(AtomicU64::new(next_id)),
        }
    }

    #[cfg(test)]
    pub fn entries(&self) -> Result<Vec<Entry>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Entry>>> {
        self.store
            .lock()
            .map_err(|_| anyhow!("dev store lock poisoned"))
    }
}

impl Default for DevBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntryApi for DevBackend {
    async fn list_entries(&self, query: Option<&str>) -> Result<Vec<Entry>> {
        let needle = query.unwrap_or_default().to_lowercase();
        Ok(self
            .lock()?
            .iter()
            .filter(|entry| {
                needle.is_empty()
                    || entry.title.to_lowercase().contains(&needle)
                    || entry.author.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn create_entry(&self, payload: &EntryPayload) -> Result<MutationResponse> {
        if let Some(error) = rejection(payload) {
            return Ok(MutationResponse::failed(error));
        }

        let id = format!("dev-{}", self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock()?.insert(0, entry_from_payload(id, payload));
        Ok(MutationResponse::succeeded("Saved!"))
    }

    async fn update_entry(&self, id: &str, payload: &EntryPayload) -> Result<MutationResponse> {
        if let Some(error) = rejection(payload) {
            return Ok(MutationResponse::failed(error));
        }

        let mut store = self.lock()?;
        match store.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                *entry = entry_from_payload(id.to_string(), payload);
                Ok(MutationResponse::succeeded("Updated!"))
            }
            None => Ok(MutationResponse::failed(format!("entry not found: {}", id))),
        }
    }

    async fn delete_entry(&self, id: &str) -> Result<MutationResponse> {
        let mut store = self.lock()?;
        let before = store.len();
        store.retain(|entry| entry.id != id);

        if store.len() == before {
            return Ok(MutationResponse::failed(format!("entry not found: {}", id)));
        }
        Ok(MutationResponse::succeeded("Deleted!"))
    }

    async fn autocomplete(&self) -> Result<Suggestions> {
        let store = self.lock()?;
        let mut suggestions = Suggestions::default();

        for entry in store.iter() {
            push_unique(&mut suggestions.titles, entry.title.trim());
            for author in entry.author.split(',') {
                push_unique(&mut suggestions.authors, author.trim());
            }
        }

        Ok(suggestions)
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}

/// The subset of server-side validation that matters for local testing.
fn rejection(payload: &EntryPayload) -> Option<&'static str> {
    if payload.title.trim().is_empty() {
        return Some("title is required");
    }
    if payload.author.trim().is_empty() {
        return Some("author is required");
    }
    if [&payload.page, &payload.chapter, &payload.section]
        .iter()
        .all(|start| start.trim().is_empty())
    {
        return Some("at least one of page, chapter or section is required");
    }
    None
}

fn entry_from_payload(id: String, payload: &EntryPayload) -> Entry {
    Entry {
        id,
        title: payload.title.trim().to_string(),
        author: payload.author.trim().to_string(),
        date: payload.date.trim().to_string(),
        page: page_marker(&payload.page),
        page_end: page_marker(&payload.page_end),
        chapter: text_marker(&payload.chapter),
        chapter_end: text_marker(&payload.chapter_end),
        section: text_marker(&payload.section),
        section_end: text_marker(&payload.section_end),
        comment: Some(payload.comment.clone()),
    }
}

fn page_marker(value: &str) -> Option<Marker> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(
        value
            .parse::<i64>()
            .map(Marker::Number)
            .unwrap_or_else(|_| Marker::from(value)),
    )
}

fn text_marker(value: &str) -> Option<Marker> {
    let value = value.trim();
    (!value.is_empty()).then(|| Marker::from(value))
}

fn seed_dev_entries() -> Vec<Entry> {
    let entry = |idx: u32,
                 title: &str,
                 author: &str,
                 date: &str,
                 page: Option<(i64, Option<i64>)>,
                 chapter: Option<(&str, Option<&str>)>,
                 comment: &str| Entry {
        id: format!("dev-{}", idx),
        title: title.to_string(),
        author: author.to_string(),
        date: date.to_string(),
        page: page.map(|(start, _)| Marker::Number(start)),
        page_end: page.and_then(|(_, end)| end.map(Marker::Number)),
        chapter: chapter.map(|(start, _)| Marker::from(start)),
        chapter_end: chapter.and_then(|(_, end)| end.map(Marker::from)),
        section: None,
        section_end: None,
        comment: Some(comment.to_string()),
    };

    vec![
        entry(
            4,
            "Good Omens",
            "Terry Pratchett, Neil Gaiman",
            "2024-03-02",
            Some((112, Some(180))),
            None,
            "Crowley & Aziraphale at the airbase",
        ),
        entry(
            3,
            "Dune",
            "Frank Herbert",
            "2024-02-11",
            Some((210, None)),
            Some(("2", Some("3"))),
            "",
        ),
        entry(
            2,
            "The Rust Programming Language",
            "Steve Klabnik, Carol Nichols",
            "2024-01-20",
            None,
            Some(("16", None)),
            "Fearless concurrency <Send + Sync>",
        ),
        entry(
            1,
            "Dune",
            "Frank Herbert",
            "2024-01-03",
            Some((1, Some(95))),
            Some(("1", None)),
            "Started the re-read",
        ),
    ]
}

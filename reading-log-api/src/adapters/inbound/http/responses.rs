use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::models::{Entry, Suggestions};

/// One entry in list/search results.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Date in YYYY-MM-DD format.
    pub date: String,
    pub page: Option<u32>,
    pub page_end: Option<u32>,
    pub chapter: Option<String>,
    pub chapter_end: Option<String>,
    pub section: Option<String>,
    pub section_end: Option<String>,
    pub comment: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title,
            author: entry.author,
            date: entry.date.to_string(),
            page: entry.page,
            page_end: entry.page_end,
            chapter: entry.chapter,
            chapter_end: entry.chapter_end,
            section: entry.section,
            section_end: entry.section_end,
            comment: entry.comment,
            timestamp: entry.timestamp,
        }
    }
}

/// Envelope returned by create, update and delete.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MutationResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AutocompleteResponse {
    pub titles: Vec<String>,
    pub authors: Vec<String>,
}

impl From<Suggestions> for AutocompleteResponse {
    fn from(suggestions: Suggestions) -> Self {
        Self {
            titles: suggestions.titles,
            authors: suggestions.authors,
        }
    }
}

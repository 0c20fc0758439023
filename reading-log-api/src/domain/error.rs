use strum::Display;
use thiserror::Error;

use super::models::EntryId;

/// Which page field a page validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PageField {
    #[strum(serialize = "page")]
    Page,
    #[strum(serialize = "page end")]
    PageEnd,
}

/// Errors that can occur while reading or changing the reading log.
#[derive(Debug, Error, PartialEq)]
pub enum EntryError {
    #[error("title is required")]
    TitleRequired,
    #[error("author is required")]
    AuthorRequired,
    #[error("date must be formatted as YYYY-MM-DD: {0}")]
    InvalidDate(String),
    #[error("at least one of page, chapter or section is required")]
    PositionRequired,
    #[error("{field} must be a number: {value}")]
    PageNotNumeric { field: PageField, value: String },
    #[error("{field} must be between {min} and {max}")]
    PageOutOfRange { field: PageField, min: u32, max: u32 },
    #[error("page end must not be before the start page")]
    PageEndBeforeStart,
    #[error("entry not found: {0}")]
    NotFound(EntryId),
    #[error("storage error: {0}")]
    Storage(String),
}

impl EntryError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

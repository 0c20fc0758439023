use serde::{Deserialize, Serialize};
use std::fmt;

/// A reading-log entry as returned by reading-log-api.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Date in YYYY-MM-DD format.
    pub date: String,
    #[serde(default)]
    pub page: Option<Marker>,
    #[serde(default)]
    pub page_end: Option<Marker>,
    #[serde(default)]
    pub chapter: Option<Marker>,
    #[serde(default)]
    pub chapter_end: Option<Marker>,
    #[serde(default)]
    pub section: Option<Marker>,
    #[serde(default)]
    pub section_end: Option<Marker>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// A position marker value. Pages travel as numbers, chapters and sections
/// as free text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Marker {
    Number(i64),
    Text(String),
}

impl Marker {
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{}", number),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<i64> for Marker {
    fn from(number: i64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Marker {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Previously used titles and authors, as returned by GET /api/autocomplete.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Suggestions {
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub authors: Vec<String>,
}

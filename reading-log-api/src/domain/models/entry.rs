use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use super::EntryId;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// RFC 3339 on write. Reads also accept offset-less ISO 8601 date-times,
/// as found in older logs, and take them as UTC.
mod timestamp {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use time::{
        format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime,
        PrimitiveDateTime,
    };

    pub fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        time::serde::rfc3339::serialize(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let local = format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
        );

        let raw = String::deserialize(deserializer)?;
        OffsetDateTime::parse(&raw, &Rfc3339)
            .or_else(|_| PrimitiveDateTime::parse(&raw, local).map(PrimitiveDateTime::assume_utc))
            .map_err(|err| D::Error::custom(format!("invalid timestamp {raw:?}: {err}")))
    }
}

/// A reading-log record as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    /// One or more authors, comma separated.
    pub author: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_end: Option<u32>,
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub chapter_end: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub section_end: Option<String>,
    #[serde(default)]
    pub comment: String,
    /// When the entry was first created. Survives updates.
    #[serde(with = "timestamp")]
    pub timestamp: OffsetDateTime,
}

/// The user-editable part of an entry, after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFields {
    pub title: String,
    pub author: String,
    pub date: Date,
    pub page: Option<u32>,
    pub page_end: Option<u32>,
    pub chapter: Option<String>,
    pub chapter_end: Option<String>,
    pub section: Option<String>,
    pub section_end: Option<String>,
    pub comment: String,
}

/// Raw field values submitted for a create or update, before validation.
///
/// Optional fields are `None` when the client left them blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub title: String,
    pub author: String,
    pub date: String,
    pub page: Option<String>,
    pub page_end: Option<String>,
    pub chapter: Option<String>,
    pub chapter_end: Option<String>,
    pub section: Option<String>,
    pub section_end: Option<String>,
    pub comment: String,
}

impl Entry {
    pub fn new(id: EntryId, fields: EntryFields, timestamp: OffsetDateTime) -> Self {
        Self {
            id,
            title: fields.title,
            author: fields.author,
            date: fields.date,
            page: fields.page,
            page_end: fields.page_end,
            chapter: fields.chapter,
            chapter_end: fields.chapter_end,
            section: fields.section,
            section_end: fields.section_end,
            comment: fields.comment,
            timestamp,
        }
    }

    /// Full replace of the editable fields. Id and timestamp are kept.
    pub fn replace_fields(&mut self, fields: EntryFields) {
        let id = self.id.clone();
        let timestamp = self.timestamp;
        *self = Self::new(id, fields, timestamp);
    }

    /// Case-insensitive substring match on title or author.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

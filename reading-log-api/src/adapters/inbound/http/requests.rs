use serde::{Deserialize, Deserializer};

use crate::domain::models::EntryDraft;

/// Body of create and update requests.
///
/// Form clients send every field as a string, other clients may send page
/// numbers as JSON numbers. Blank optional fields count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct EntryPayload {
    #[serde(default, deserialize_with = "text")]
    pub title: String,
    #[serde(default, deserialize_with = "text")]
    pub author: String,
    #[serde(default, deserialize_with = "text")]
    pub date: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub page: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub page_end: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub chapter: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub chapter_end: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub section: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub section_end: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub comment: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl FieldValue {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(number) => number.to_string(),
            Self::Float(number) => number.to_string(),
        }
    }
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<FieldValue>::deserialize(deserializer)?
        .map(FieldValue::into_string)
        .unwrap_or_default())
}

fn optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<FieldValue>::deserialize(deserializer)?
        .map(|value| value.into_string().trim().to_string())
        .filter(|value| !value.is_empty()))
}

impl From<EntryPayload> for EntryDraft {
    fn from(payload: EntryPayload) -> Self {
        Self {
            title: payload.title,
            author: payload.author,
            date: payload.date,
            page: payload.page,
            page_end: payload.page_end,
            chapter: payload.chapter,
            chapter_end: payload.chapter_end,
            section: payload.section,
            section_end: payload.section_end,
            comment: payload.comment,
        }
    }
}

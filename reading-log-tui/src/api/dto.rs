use serde::{Deserialize, Serialize};

/// Body of POST /api/save and PUT /api/update/<id>.
///
/// Every form field is sent, blank ones as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryPayload {
    pub title: String,
    pub author: String,
    pub date: String,
    pub page: String,
    pub page_end: String,
    pub chapter: String,
    pub chapter_end: String,
    pub section: String,
    pub section_end: String,
    pub comment: String,
}

/// Envelope returned by create, update and delete.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl MutationResponse {
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

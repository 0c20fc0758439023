//! View models shared by the terminal table and the HTML export.

pub mod html;

use crate::types::{Entry, Marker};

/// Per-row edit/delete bindings. Views refer to a row by index and look the
/// id and title up here instead of embedding them in markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActions {
    pub row: usize,
    pub entry_id: String,
    pub title: String,
}

/// One rendered line of the entry list. All values are plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    pub date: String,
    pub title: String,
    pub author: String,
    pub position: String,
    pub comment: String,
    pub actions: RowActions,
}

impl EntryRow {
    pub fn new(row: usize, entry: &Entry) -> Self {
        Self {
            date: entry.date.clone(),
            title: entry.title.clone(),
            author: entry.author.clone(),
            position: format_position(entry),
            comment: entry.comment.clone().unwrap_or_default(),
            actions: RowActions {
                row,
                entry_id: entry.id.clone(),
                title: entry.title.clone(),
            },
        }
    }
}

pub fn entry_rows(entries: &[Entry]) -> Vec<EntryRow> {
    entries
        .iter()
        .enumerate()
        .map(|(row, entry)| EntryRow::new(row, entry))
        .collect()
}

/// Joins the page, chapter and section ranges, e.g. `p.10-20, ch.3`.
/// An end marker without its start is dropped.
pub fn format_position(entry: &Entry) -> String {
    [
        ("p", &entry.page, &entry.page_end),
        ("ch", &entry.chapter, &entry.chapter_end),
        ("sec", &entry.section, &entry.section_end),
    ]
    .into_iter()
    .filter_map(|(label, start, end)| format_range(label, start.as_ref(), end.as_ref()))
    .collect::<Vec<_>>()
    .join(", ")
}

fn format_range(label: &str, start: Option<&Marker>, end: Option<&Marker>) -> Option<String> {
    let start = start.filter(|marker| !marker.is_blank())?;
    match end.filter(|marker| !marker.is_blank()) {
        Some(end) => Some(format!("{}.{}-{}", label, start, end)),
        None => Some(format!("{}.{}", label, start)),
    }
}

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::fs;
use std::path::Path;

use super::{entry_rows, EntryRow};
use crate::types::Entry;

/// Writes the entry list as a standalone HTML page.
pub fn write_page(entries: &[Entry], query: Option<&str>, path: &Path) -> Result<()> {
    let page = render_page(entries, query);
    fs::write(path, page.into_string())
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Every interpolated value goes through maud's escaping; row bindings are
/// data attributes, never script.
pub fn render_page(entries: &[Entry], query: Option<&str>) -> Markup {
    let rows = entry_rows(entries);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Reading log" }
                style { (PreEscaped(CSS)) }
            }
            body {
                h1 { "Reading log" }
                @if let Some(query) = query.filter(|query| !query.is_empty()) {
                    p.query { "Search: " (query) }
                }
                p.stats { span #"total-count" { (rows.len()) } " entries" }
                @if rows.is_empty() {
                    p.empty-state { "No entries found." }
                } @else {
                    table #"entries" {
                        thead {
                            tr {
                                th { "Date" }
                                th { "Title" }
                                th { "Author" }
                                th { "Position" }
                                th { "Comment" }
                            }
                        }
                        tbody {
                            @for row in &rows {
                                (render_row(row))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_row(row: &EntryRow) -> Markup {
    html! {
        tr data-row=(row.actions.row)
            data-entry-id=(row.actions.entry_id)
            data-title=(row.actions.title) {
            td { (row.date) }
            td { (row.title) }
            td { (row.author) }
            td { (row.position) }
            td.comment { (row.comment) }
        }
    }
}

const CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, sans-serif;
    max-width: 960px;
    margin: 0 auto;
    padding: 32px 16px;
    color: #222;
}

table {
    width: 100%;
    border-collapse: collapse;
}

th, td {
    text-align: left;
    padding: 6px 8px;
    border-bottom: 1px solid #ddd;
    vertical-align: top;
}

.comment {
    white-space: pre-wrap;
    color: #555;
}

.stats, .query, .empty-state {
    color: #666;
}
"#;

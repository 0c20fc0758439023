use itertools::Itertools;

use super::Entry;

/// Previously used titles and authors, offered as input hints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suggestions {
    pub titles: Vec<String>,
    pub authors: Vec<String>,
}

impl Suggestions {
    /// Distinct titles and individual author names, in store order.
    pub fn from_entries(entries: &[Entry]) -> Self {
        let titles = entries
            .iter()
            .map(|entry| entry.title.trim())
            .filter(|title| !title.is_empty())
            .unique()
            .map(str::to_string)
            .collect();

        let authors = entries
            .iter()
            .flat_map(|entry| entry.author.split(','))
            .map(str::trim)
            .filter(|author| !author.is_empty())
            .unique()
            .map(str::to_string)
            .collect();

        Self { titles, authors }
    }
}

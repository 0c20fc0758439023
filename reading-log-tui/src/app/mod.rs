use time::Date;

use crate::types::{Entry, Suggestions};

mod form;
mod state;
pub use form::{EntryForm, FormField, FormMode};
pub use state::{DeleteContext, Focus, StatusKind, StatusMessage, TextInput};

/// Number of autocomplete suggestions shown under a focused input.
pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub running: bool,
    pub form: EntryForm,
    pub focus: Focus,
    pub search_input: TextInput,

    // Last fetched list, newest first
    pub entries: Vec<Entry>,
    pub selected_row: usize,

    pub suggestions: Suggestions,
    pub status: Option<StatusMessage>,

    /// Blocking message, dismissed by any key.
    pub alert: Option<String>,
    pub delete_context: Option<DeleteContext>,
}

impl App {
    pub fn new(today: Date) -> Self {
        Self {
            running: true,
            form: EntryForm::new(today),
            focus: Focus::Form(FormField::Title),
            search_input: TextInput::new(),
            entries: Vec::new(),
            selected_row: 0,
            suggestions: Suggestions::default(),
            status: None,
            alert: None,
            delete_context: None,
        }
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected_row)
    }

    /// Replaces the list, keeping the selection inside its bounds.
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.selected_row = self
            .selected_row
            .min(self.entries.len().saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        if self.selected_row + 1 < self.entries.len() {
            self.selected_row += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// The input currently receiving text, if any.
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Search => Some(&mut self.search_input),
            Focus::Form(field) => Some(self.form.input_mut(field)),
            Focus::Entries => None,
        }
    }

    /// Suggestions matching the focused title or author input.
    pub fn visible_suggestions(&self) -> Vec<&str> {
        let Focus::Form(field) = self.focus else {
            return Vec::new();
        };
        let candidates = match field {
            FormField::Title => &self.suggestions.titles,
            FormField::Author => &self.suggestions.authors,
            _ => return Vec::new(),
        };

        let typed = self.form.value(field).trim().to_lowercase();
        if typed.is_empty() {
            return Vec::new();
        }

        candidates
            .iter()
            .filter(|candidate| {
                let candidate = candidate.to_lowercase();
                candidate != typed && candidate.contains(&typed)
            })
            .take(MAX_SUGGESTIONS)
            .map(String::as_str)
            .collect()
    }

    /// Cycles focus: search, form fields in order, entry list.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::Form(FormField::Title),
            Focus::Form(field) => field.next().map(Focus::Form).unwrap_or(Focus::Entries),
            Focus::Entries => Focus::Search,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Search => Focus::Entries,
            Focus::Form(field) => field.prev().map(Focus::Form).unwrap_or(Focus::Search),
            Focus::Entries => Focus::Form(FormField::Comment),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn app_with_suggestions() -> App {
        let mut app = App::new(date!(2024 - 06 - 09));
        app.suggestions = Suggestions {
            titles: vec![
                "Dune".to_string(),
                "Dune Messiah".to_string(),
                "Children of Dune".to_string(),
                "Emma".to_string(),
            ],
            authors: vec!["Frank Herbert".to_string()],
        };
        app
    }

    #[test]
    fn suggestions_follow_focused_input() {
        let mut app = app_with_suggestions();
        app.form.input_mut(FormField::Title).set("dune");

        assert_eq!(
            app.visible_suggestions(),
            vec!["Dune Messiah", "Children of Dune"]
        );

        app.focus = Focus::Form(FormField::Author);
        assert!(app.visible_suggestions().is_empty());

        app.form.input_mut(FormField::Author).set("herb");
        assert_eq!(app.visible_suggestions(), vec!["Frank Herbert"]);

        app.focus = Focus::Form(FormField::Comment);
        assert!(app.visible_suggestions().is_empty());
    }

    #[test]
    fn focus_cycles_through_every_region() {
        let mut app = App::new(date!(2024 - 06 - 09));
        app.focus = Focus::Form(FormField::Comment);

        app.focus_next();
        assert_eq!(app.focus, Focus::Entries);
        app.focus_next();
        assert_eq!(app.focus, Focus::Search);
        app.focus_prev();
        assert_eq!(app.focus, Focus::Entries);
        app.focus_prev();
        assert_eq!(app.focus, Focus::Form(FormField::Comment));
    }

    #[test]
    fn shrinking_list_clamps_selection() {
        let mut app = App::new(date!(2024 - 06 - 09));
        app.selected_row = 3;
        app.set_entries(Vec::new());

        assert_eq!(app.selected_row, 0);
        assert!(app.selected_entry().is_none());
    }
}

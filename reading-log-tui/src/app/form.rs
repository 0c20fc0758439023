use time::Date;

use super::state::TextInput;
use crate::api::EntryPayload;
use crate::time_utils::format_date;
use crate::types::{Entry, Marker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Author,
    Date,
    Page,
    PageEnd,
    Chapter,
    ChapterEnd,
    Section,
    SectionEnd,
    Comment,
}

impl FormField {
    pub const ALL: [FormField; 10] = [
        FormField::Title,
        FormField::Author,
        FormField::Date,
        FormField::Page,
        FormField::PageEnd,
        FormField::Chapter,
        FormField::ChapterEnd,
        FormField::Section,
        FormField::SectionEnd,
        FormField::Comment,
    ];

    pub const REQUIRED: [FormField; 3] = [FormField::Title, FormField::Author, FormField::Date];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Date => "Date",
            FormField::Page => "Page",
            FormField::PageEnd => "Page end",
            FormField::Chapter => "Chapter",
            FormField::ChapterEnd => "Chapter end",
            FormField::Section => "Section",
            FormField::SectionEnd => "Section end",
            FormField::Comment => "Comment",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Next field in tab order, `None` after the last one.
    pub fn next(self) -> Option<FormField> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Previous field in tab order, `None` before the first one.
    pub fn prev(self) -> Option<FormField> {
        self.index()
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Fields that offer autocomplete suggestions.
    pub fn has_suggestions(self) -> bool {
        matches!(self, FormField::Title | FormField::Author)
    }
}

/// Whether a submit creates a new entry or replaces an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { entry_id: String },
}

/// Labels that change with the form mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormChrome {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub show_cancel: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    mode: FormMode,
    inputs: [TextInput; 10],
}

impl EntryForm {
    pub fn new(today: Date) -> Self {
        let mut form = Self {
            mode: FormMode::Create,
            inputs: Default::default(),
        };
        form.input_mut(FormField::Date).set(&format_date(today));
        form
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Create => None,
            FormMode::Edit { entry_id } => Some(entry_id),
        }
    }

    pub fn input(&self, field: FormField) -> &TextInput {
        &self.inputs[field.index()]
    }

    pub fn input_mut(&mut self, field: FormField) -> &mut TextInput {
        &mut self.inputs[field.index()]
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.input(field).value
    }

    /// Switches to edit mode and copies every field of `entry` into the form.
    pub fn enter_edit(&mut self, entry: &Entry) {
        self.mode = FormMode::Edit {
            entry_id: entry.id.clone(),
        };

        let marker = |marker: &Option<Marker>| {
            marker
                .as_ref()
                .map(|marker| marker.to_string())
                .unwrap_or_default()
        };

        self.input_mut(FormField::Title).set(&entry.title);
        self.input_mut(FormField::Author).set(&entry.author);
        self.input_mut(FormField::Date).set(&entry.date);
        self.input_mut(FormField::Page).set(&marker(&entry.page));
        self.input_mut(FormField::PageEnd).set(&marker(&entry.page_end));
        self.input_mut(FormField::Chapter).set(&marker(&entry.chapter));
        self.input_mut(FormField::ChapterEnd)
            .set(&marker(&entry.chapter_end));
        self.input_mut(FormField::Section).set(&marker(&entry.section));
        self.input_mut(FormField::SectionEnd)
            .set(&marker(&entry.section_end));
        self.input_mut(FormField::Comment)
            .set(entry.comment.as_deref().unwrap_or_default());
    }

    /// Back to create mode with empty fields and today's date.
    pub fn reset(&mut self, today: Date) {
        *self = Self::new(today);
    }

    pub fn chrome(&self) -> FormChrome {
        match self.mode {
            FormMode::Create => FormChrome {
                heading: "New entry",
                submit_label: "Save",
                show_cancel: false,
            },
            FormMode::Edit { .. } => FormChrome {
                heading: "Edit entry",
                submit_label: "Update",
                show_cancel: true,
            },
        }
    }

    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::REQUIRED
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    /// Request body with every field, blanks included.
    pub fn payload(&self) -> EntryPayload {
        EntryPayload {
            title: self.value(FormField::Title).to_string(),
            author: self.value(FormField::Author).to_string(),
            date: self.value(FormField::Date).to_string(),
            page: self.value(FormField::Page).to_string(),
            page_end: self.value(FormField::PageEnd).to_string(),
            chapter: self.value(FormField::Chapter).to_string(),
            chapter_end: self.value(FormField::ChapterEnd).to_string(),
            section: self.value(FormField::Section).to_string(),
            section_end: self.value(FormField::SectionEnd).to_string(),
            comment: self.value(FormField::Comment).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn dune() -> Entry {
        Entry {
            id: "42".to_string(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            date: "2024-01-01".to_string(),
            page: Some(Marker::Number(10)),
            page_end: Some(Marker::Number(20)),
            chapter: Some(Marker::from("IV")),
            chapter_end: None,
            section: None,
            section_end: None,
            comment: None,
        }
    }

    #[test]
    fn new_form_defaults_date_to_today() {
        let form = EntryForm::new(date!(2024 - 06 - 09));

        assert_eq!(form.mode(), &FormMode::Create);
        assert_eq!(form.value(FormField::Date), "2024-06-09");
        assert_eq!(form.value(FormField::Title), "");
    }

    #[test]
    fn enter_edit_populates_fields_and_chrome() {
        let mut form = EntryForm::new(date!(2024 - 06 - 09));
        form.enter_edit(&dune());

        assert_eq!(form.editing_id(), Some("42"));
        assert_eq!(form.value(FormField::Page), "10");
        assert_eq!(form.value(FormField::Chapter), "IV");
        assert_eq!(form.value(FormField::ChapterEnd), "");
        assert_eq!(form.value(FormField::Comment), "");
        assert_eq!(
            form.chrome(),
            FormChrome {
                heading: "Edit entry",
                submit_label: "Update",
                show_cancel: true,
            }
        );
    }

    #[test]
    fn payload_sends_blank_fields_as_empty_strings() {
        let mut form = EntryForm::new(date!(2024 - 06 - 09));
        form.enter_edit(&dune());

        assert_eq!(
            form.payload(),
            EntryPayload {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                date: "2024-01-01".to_string(),
                page: "10".to_string(),
                page_end: "20".to_string(),
                chapter: "IV".to_string(),
                ..EntryPayload::default()
            }
        );
    }

    #[test]
    fn reset_returns_to_create_with_today() {
        let mut form = EntryForm::new(date!(2024 - 06 - 09));
        form.enter_edit(&dune());
        form.reset(date!(2024 - 06 - 10));

        assert_eq!(form.mode(), &FormMode::Create);
        assert!(!form.chrome().show_cancel);
        assert_eq!(form.value(FormField::Title), "");
        assert_eq!(form.value(FormField::Date), "2024-06-10");
    }

    #[test]
    fn reports_missing_required_fields() {
        let mut form = EntryForm::new(date!(2024 - 06 - 09));
        form.input_mut(FormField::Author).set("  ");
        form.input_mut(FormField::Date).clear();

        assert_eq!(
            form.missing_required(),
            vec![FormField::Title, FormField::Author, FormField::Date]
        );
    }

    #[test]
    fn tab_order_stops_at_edges() {
        assert_eq!(FormField::Title.prev(), None);
        assert_eq!(FormField::Title.next(), Some(FormField::Author));
        assert_eq!(FormField::Comment.next(), None);
    }
}

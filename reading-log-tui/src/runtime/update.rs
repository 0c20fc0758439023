use time::Date;

use super::effects::{Effect, STATUS_CLEAR_DELAY};
use super::events::Event;
use crate::api::MutationResponse;
use crate::app::{App, DeleteContext, Focus, FormField, FormMode, StatusMessage};
use crate::time_utils::format_date;

/// Applies one event to the app and returns the effects to run.
///
/// Pure apart from logging: nothing here touches the network or the clock,
/// `today` is supplied by the caller.
pub fn update(app: &mut App, event: Event, today: Date) -> Vec<Effect> {
    match event {
        Event::Startup => vec![load_entries(app), Effect::LoadSuggestions],
        Event::Quit => {
            app.running = false;
            vec![]
        }

        Event::FocusNext => {
            app.focus_next();
            vec![]
        }
        Event::FocusPrev => {
            app.focus_prev();
            vec![]
        }
        Event::FocusSearch => {
            app.focus = Focus::Search;
            vec![]
        }

        Event::Input(c) => {
            if let Some(input) = app.focused_input_mut() {
                input.insert(c);
            }
            vec![]
        }
        Event::Backspace => {
            if let Some(input) = app.focused_input_mut() {
                input.backspace();
            }
            vec![]
        }
        Event::CursorLeft => {
            if let Some(input) = app.focused_input_mut() {
                input.move_left();
            }
            vec![]
        }
        Event::CursorRight => {
            cursor_right(app);
            vec![]
        }
        Event::CursorHome => {
            if let Some(input) = app.focused_input_mut() {
                input.home();
            }
            vec![]
        }
        Event::CursorEnd => {
            if let Some(input) = app.focused_input_mut() {
                input.end();
            }
            vec![]
        }

        Event::SubmitSearch => vec![load_entries(app)],
        Event::SubmitForm => submit(app),
        Event::CancelEdit => {
            cancel_edit(app, today);
            vec![]
        }

        Event::SelectNext => {
            app.select_next();
            vec![]
        }
        Event::SelectPrev => {
            app.select_prev();
            vec![]
        }
        Event::EditSelected => {
            if let Some(entry) = app.selected_entry().cloned() {
                app.form.enter_edit(&entry);
                app.focus = Focus::Form(FormField::Title);
            }
            vec![]
        }
        Event::RequestDelete => {
            if let Some(entry) = app.selected_entry() {
                app.delete_context = Some(DeleteContext {
                    entry_id: entry.id.clone(),
                    title: entry.title.clone(),
                });
            }
            vec![]
        }
        Event::ConfirmDelete => match app.delete_context.take() {
            Some(context) => vec![Effect::DeleteEntry {
                id: context.entry_id,
            }],
            None => vec![],
        },
        Event::DeclineDelete => {
            app.delete_context = None;
            vec![]
        }
        Event::DismissAlert => {
            app.alert = None;
            vec![]
        }

        Event::EntriesLoaded(Ok(entries)) => {
            app.set_entries(entries);
            vec![]
        }
        Event::EntriesLoaded(Err(e)) => {
            tracing::warn!("Failed to load entries: {}", e);
            vec![]
        }
        Event::SuggestionsLoaded(Ok(suggestions)) => {
            app.suggestions = suggestions;
            vec![]
        }
        Event::SuggestionsLoaded(Err(e)) => {
            tracing::warn!("Failed to load autocomplete data: {}", e);
            vec![]
        }

        Event::SubmitFinished(Ok(response)) if response.success => {
            app.status = Some(StatusMessage::success(success_text(response, "Saved!")));
            app.form.reset(today);
            vec![
                load_entries(app),
                Effect::LoadSuggestions,
                Effect::ClearStatusAfter(STATUS_CLEAR_DELAY),
            ]
        }
        Event::SubmitFinished(Ok(response)) => {
            app.status = Some(StatusMessage::error(failure_text(response)));
            vec![]
        }
        Event::SubmitFinished(Err(cause)) => {
            app.status = Some(StatusMessage::error(format!("An error occurred: {}", cause)));
            vec![]
        }

        Event::DeleteFinished(Ok(response)) if response.success => {
            app.status = Some(StatusMessage::success(success_text(response, "Deleted!")));
            vec![
                load_entries(app),
                Effect::ClearStatusAfter(STATUS_CLEAR_DELAY),
            ]
        }
        Event::DeleteFinished(Ok(response)) => {
            app.alert = Some(format!("Failed to delete: {}", failure_text(response)));
            vec![]
        }
        Event::DeleteFinished(Err(cause)) => {
            app.alert = Some(format!("An error occurred: {}", cause));
            vec![]
        }

        // May clear a newer message than the one that scheduled it.
        Event::ClearStatus => {
            app.status = None;
            vec![]
        }
    }
}

/// Lists with the current search term.
fn load_entries(app: &App) -> Effect {
    let query = app.search_input.value.trim();
    Effect::LoadEntries {
        query: (!query.is_empty()).then(|| query.to_string()),
    }
}

fn submit(app: &mut App) -> Vec<Effect> {
    let missing = app.form.missing_required();
    if !missing.is_empty() {
        let labels = missing
            .iter()
            .map(|field| field.label())
            .collect::<Vec<_>>()
            .join(", ");
        app.status = Some(StatusMessage::error(format!(
            "Please fill in the required fields: {}",
            labels
        )));
        return vec![];
    }

    let payload = app.form.payload();
    match app.form.mode() {
        FormMode::Create => vec![Effect::CreateEntry(payload)],
        FormMode::Edit { entry_id } => vec![Effect::UpdateEntry {
            id: entry_id.clone(),
            payload,
        }],
    }
}

/// In edit mode, drops the edit and clears the form. In create mode only
/// the date is reset.
fn cancel_edit(app: &mut App, today: Date) {
    if app.form.editing_id().is_some() {
        app.form.reset(today);
    } else {
        app.form
            .input_mut(FormField::Date)
            .set(&format_date(today));
    }
}

/// Right arrow at the end of a title or author accepts the first suggestion.
fn cursor_right(app: &mut App) {
    if let Focus::Form(field) = app.focus {
        if field.has_suggestions() && app.form.input(field).at_end() {
            if let Some(first) = app.visible_suggestions().first().map(|s| s.to_string()) {
                app.form.input_mut(field).set(&first);
                return;
            }
        }
    }

    if let Some(input) = app.focused_input_mut() {
        input.move_right();
    }
}

fn success_text(response: MutationResponse, fallback: &str) -> String {
    response.message.unwrap_or_else(|| fallback.to_string())
}

fn failure_text(response: MutationResponse) -> String {
    response
        .error
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EntryPayload;
    use crate::app::StatusKind;
    use crate::types::{Entry, Marker, Suggestions};
    use time::macros::date;

    const TODAY: Date = date!(2024 - 06 - 09);

    fn dune() -> Entry {
        Entry {
            id: "42".to_string(),
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            date: "2024-01-01".to_string(),
            page: Some(Marker::Number(10)),
            page_end: None,
            chapter: Some(Marker::from("2")),
            chapter_end: Some(Marker::from("3")),
            section: None,
            section_end: None,
            comment: Some("spice".to_string()),
        }
    }

    fn app_with_dune() -> App {
        let mut app = App::new(TODAY);
        app.set_entries(vec![dune()]);
        app
    }

    fn type_into(app: &mut App, field: FormField, text: &str) {
        app.focus = Focus::Form(field);
        for c in text.chars() {
            update(app, Event::Input(c), TODAY);
        }
    }

    #[test]
    fn startup_loads_entries_and_suggestions() {
        let mut app = App::new(TODAY);

        assert_eq!(
            update(&mut app, Event::Startup, TODAY),
            vec![Effect::LoadEntries { query: None }, Effect::LoadSuggestions]
        );
    }

    #[test]
    fn empty_search_requests_unfiltered_list() {
        let mut app = App::new(TODAY);
        app.focus = Focus::Search;

        assert_eq!(
            update(&mut app, Event::SubmitSearch, TODAY),
            vec![Effect::LoadEntries { query: None }]
        );

        for c in "dune".chars() {
            update(&mut app, Event::Input(c), TODAY);
        }
        assert_eq!(
            update(&mut app, Event::SubmitSearch, TODAY),
            vec![Effect::LoadEntries {
                query: Some("dune".to_string())
            }]
        );
    }

    #[test]
    fn unchanged_edit_submits_entry_fields_by_id() {
        let mut app = app_with_dune();

        update(&mut app, Event::EditSelected, TODAY);
        assert_eq!(app.focus, Focus::Form(FormField::Title));
        assert_eq!(app.form.chrome().submit_label, "Update");

        let effects = update(&mut app, Event::SubmitForm, TODAY);

        assert_eq!(
            effects,
            vec![Effect::UpdateEntry {
                id: "42".to_string(),
                payload: EntryPayload {
                    title: "Dune".to_string(),
                    author: "Herbert".to_string(),
                    date: "2024-01-01".to_string(),
                    page: "10".to_string(),
                    page_end: String::new(),
                    chapter: "2".to_string(),
                    chapter_end: "3".to_string(),
                    section: String::new(),
                    section_end: String::new(),
                    comment: "spice".to_string(),
                },
            }]
        );
    }

    #[test]
    fn cancel_in_create_mode_only_resets_date() {
        let mut app = App::new(TODAY);
        type_into(&mut app, FormField::Title, "Emma");
        app.form.input_mut(FormField::Date).set("2020-02-02");

        update(&mut app, Event::CancelEdit, date!(2024 - 06 - 10));

        assert_eq!(app.form.mode(), &FormMode::Create);
        assert_eq!(app.form.value(FormField::Title), "Emma");
        assert_eq!(app.form.value(FormField::Date), "2024-06-10");
    }

    #[test]
    fn cancel_in_edit_mode_clears_form() {
        let mut app = app_with_dune();
        update(&mut app, Event::EditSelected, TODAY);

        update(&mut app, Event::CancelEdit, TODAY);

        assert_eq!(app.form.mode(), &FormMode::Create);
        assert_eq!(app.form.value(FormField::Title), "");
        assert_eq!(app.form.value(FormField::Date), "2024-06-09");
        assert_eq!(app.form.chrome().heading, "New entry");
    }

    #[test]
    fn create_success_refreshes_and_resets() {
        let mut app = App::new(TODAY);
        type_into(&mut app, FormField::Title, "Dune");
        type_into(&mut app, FormField::Author, "Herbert");
        app.form.input_mut(FormField::Date).set("2024-01-01");
        type_into(&mut app, FormField::Page, "10");

        let effects = update(&mut app, Event::SubmitForm, TODAY);
        assert_eq!(
            effects,
            vec![Effect::CreateEntry(EntryPayload {
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                date: "2024-01-01".to_string(),
                page: "10".to_string(),
                ..EntryPayload::default()
            })]
        );

        let effects = update(
            &mut app,
            Event::SubmitFinished(Ok(MutationResponse::succeeded("saved"))),
            date!(2024 - 06 - 11),
        );

        assert_eq!(
            effects,
            vec![
                Effect::LoadEntries { query: None },
                Effect::LoadSuggestions,
                Effect::ClearStatusAfter(STATUS_CLEAR_DELAY),
            ]
        );
        assert_eq!(app.form.mode(), &FormMode::Create);
        assert_eq!(app.form.value(FormField::Title), "");
        assert_eq!(app.form.value(FormField::Date), "2024-06-11");
        assert_eq!(app.status, Some(StatusMessage::success("saved")));

        update(&mut app, Event::ClearStatus, TODAY);
        assert_eq!(app.status, None);
    }

    #[test]
    fn missing_required_fields_block_submit() {
        let mut app = App::new(TODAY);
        type_into(&mut app, FormField::Title, "Dune");

        let effects = update(&mut app, Event::SubmitForm, TODAY);

        assert!(effects.is_empty());
        let status = app.status.unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "Please fill in the required fields: Author");
    }

    #[test]
    fn rejected_submit_keeps_edit_state() {
        let mut app = app_with_dune();
        update(&mut app, Event::EditSelected, TODAY);
        let form_before = app.form.clone();

        let effects = update(
            &mut app,
            Event::SubmitFinished(Ok(MutationResponse::failed("page must be between 1 and 1000"))),
            TODAY,
        );

        assert!(effects.is_empty());
        assert_eq!(app.form, form_before);
        assert_eq!(
            app.status,
            Some(StatusMessage::error("page must be between 1 and 1000"))
        );
    }

    #[test]
    fn transport_failure_reports_cause() {
        let mut app = App::new(TODAY);

        update(
            &mut app,
            Event::SubmitFinished(Err("connection refused".to_string())),
            TODAY,
        );

        assert_eq!(
            app.status,
            Some(StatusMessage::error("An error occurred: connection refused"))
        );
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let mut app = app_with_dune();
        let before = app.clone();

        let requested = update(&mut app, Event::RequestDelete, TODAY);
        assert!(requested.is_empty());
        assert_eq!(
            app.delete_context.as_ref().map(DeleteContext::prompt),
            Some("Delete \"Dune\"?".to_string())
        );

        let declined = update(&mut app, Event::DeclineDelete, TODAY);

        assert!(declined.is_empty());
        assert_eq!(app, before);
    }

    #[test]
    fn confirmed_delete_issues_request() {
        let mut app = app_with_dune();
        update(&mut app, Event::RequestDelete, TODAY);

        let effects = update(&mut app, Event::ConfirmDelete, TODAY);

        assert_eq!(
            effects,
            vec![Effect::DeleteEntry {
                id: "42".to_string()
            }]
        );
        assert!(app.delete_context.is_none());
    }

    #[test]
    fn delete_failures_raise_alert_not_status() {
        let mut app = app_with_dune();

        update(
            &mut app,
            Event::DeleteFinished(Ok(MutationResponse::failed("entry not found: 42"))),
            TODAY,
        );
        assert_eq!(
            app.alert.as_deref(),
            Some("Failed to delete: entry not found: 42")
        );
        assert!(app.status.is_none());

        update(&mut app, Event::DismissAlert, TODAY);
        update(
            &mut app,
            Event::DeleteFinished(Err("timed out".to_string())),
            TODAY,
        );
        assert_eq!(app.alert.as_deref(), Some("An error occurred: timed out"));
    }

    #[test]
    fn delete_success_refreshes_list_only() {
        let mut app = app_with_dune();

        let effects = update(
            &mut app,
            Event::DeleteFinished(Ok(MutationResponse::succeeded("Deleted!"))),
            TODAY,
        );

        assert_eq!(
            effects,
            vec![
                Effect::LoadEntries { query: None },
                Effect::ClearStatusAfter(STATUS_CLEAR_DELAY),
            ]
        );
        assert_eq!(app.status, Some(StatusMessage::success("Deleted!")));
    }

    #[test]
    fn failed_loads_keep_previous_state() {
        let mut app = app_with_dune();
        app.suggestions = Suggestions {
            titles: vec!["Dune".to_string()],
            authors: vec![],
        };

        update(&mut app, Event::EntriesLoaded(Err("boom".to_string())), TODAY);
        update(
            &mut app,
            Event::SuggestionsLoaded(Err("boom".to_string())),
            TODAY,
        );

        assert_eq!(app.entries, vec![dune()]);
        assert_eq!(app.suggestions.titles, vec!["Dune"]);
        assert!(app.status.is_none());
        assert!(app.alert.is_none());
    }

    #[test]
    fn right_arrow_at_end_accepts_first_suggestion() {
        let mut app = App::new(TODAY);
        app.suggestions.authors = vec!["Frank Herbert".to_string()];
        type_into(&mut app, FormField::Author, "fra");

        update(&mut app, Event::CursorRight, TODAY);
        assert_eq!(app.form.value(FormField::Author), "Frank Herbert");

        update(&mut app, Event::CursorHome, TODAY);
        update(&mut app, Event::CursorRight, TODAY);
        assert_eq!(app.form.input(FormField::Author).cursor, 1);
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::events::Event;
use crate::app::{App, Focus};

/// Translates a key press into an event for the current focus. Open
/// dialogs capture every key.
pub fn map_key(key: KeyEvent, app: &App) -> Option<Event> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Event::Quit);
    }
    if app.alert.is_some() {
        return Some(Event::DismissAlert);
    }
    if app.delete_context.is_some() {
        return map_confirm_delete_key(key);
    }

    match key.code {
        KeyCode::Tab => return Some(Event::FocusNext),
        KeyCode::BackTab => return Some(Event::FocusPrev),
        KeyCode::Char('s') if ctrl => return Some(Event::SubmitForm),
        KeyCode::Char('f') if ctrl => return Some(Event::FocusSearch),
        _ => {}
    }

    match app.focus {
        Focus::Entries => map_entries_key(key),
        Focus::Search => match key.code {
            KeyCode::Enter => Some(Event::SubmitSearch),
            KeyCode::Down => Some(Event::FocusNext),
            _ => map_text_key(key),
        },
        Focus::Form(_) => match key.code {
            KeyCode::Enter => Some(Event::SubmitForm),
            KeyCode::Esc => Some(Event::CancelEdit),
            KeyCode::Up => Some(Event::FocusPrev),
            KeyCode::Down => Some(Event::FocusNext),
            _ => map_text_key(key),
        },
    }
}

fn map_confirm_delete_key(key: KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Event::ConfirmDelete),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Event::DeclineDelete),
        _ => None,
    }
}

fn map_entries_key(key: KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Event::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(Event::SelectNext),
        KeyCode::Enter | KeyCode::Char('e') => Some(Event::EditSelected),
        KeyCode::Char('d') | KeyCode::Delete => Some(Event::RequestDelete),
        KeyCode::Char('/') => Some(Event::FocusSearch),
        KeyCode::Esc => Some(Event::CancelEdit),
        KeyCode::Char('q') => Some(Event::Quit),
        _ => None,
    }
}

fn map_text_key(key: KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Event::Input(c))
        }
        KeyCode::Backspace => Some(Event::Backspace),
        KeyCode::Left => Some(Event::CursorLeft),
        KeyCode::Right => Some(Event::CursorRight),
        KeyCode::Home => Some(Event::CursorHome),
        KeyCode::End => Some(Event::CursorEnd),
        _ => None,
    }
}

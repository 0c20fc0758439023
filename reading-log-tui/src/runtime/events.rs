use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::MutationResponse;
use crate::types::{Entry, Suggestions};

/// Everything that can change `App`: key presses (via `keys::map_key`) and
/// results posted back by effect tasks. Request errors arrive flattened to
/// their display text.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Startup,
    Quit,

    FocusNext,
    FocusPrev,
    FocusSearch,

    Input(char),
    Backspace,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    SubmitSearch,
    SubmitForm,
    CancelEdit,

    SelectNext,
    SelectPrev,
    EditSelected,
    RequestDelete,
    ConfirmDelete,
    DeclineDelete,
    DismissAlert,

    EntriesLoaded(Result<Vec<Entry>, String>),
    SuggestionsLoaded(Result<Suggestions, String>),
    SubmitFinished(Result<MutationResponse, String>),
    DeleteFinished(Result<MutationResponse, String>),
    ClearStatus,
}

pub type EventTx = UnboundedSender<Event>;
pub type EventRx = UnboundedReceiver<Event>;

pub fn channel() -> (EventTx, EventRx) {
    mpsc::unbounded_channel()
}

use crate::api::EntryApi;
use crate::app::App;
use crate::time_utils::local_today;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use super::effects::run_effect;
use super::events::{channel, Event, EventTx};
use super::keys::map_key;
use super::update::update;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api: Arc<dyn EntryApi>,
) -> Result<()> {
    let (event_tx, mut event_rx) = channel();
    dispatch(app, Event::Startup, &api, &event_tx);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(event) = map_key(key, app) {
                        dispatch(app, event, &api, &event_tx);
                    }
                }
            }
        }

        while let Ok(event) = event_rx.try_recv() {
            dispatch(app, event, &api, &event_tx);
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}

fn dispatch(app: &mut App, event: Event, api: &Arc<dyn EntryApi>, event_tx: &EventTx) {
    for effect in update(app, event, local_today()) {
        run_effect(effect, api, event_tx);
    }
}

use std::sync::Arc;

use crate::domain::ports::inbound::EntryService;

#[derive(Clone)]
pub struct AppState {
    pub entry_service: Arc<dyn EntryService>,
}

impl AppState {
    pub fn new(entry_service: Arc<dyn EntryService>) -> Self {
        Self { entry_service }
    }
}

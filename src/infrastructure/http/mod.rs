pub mod router;

use crate::application::services::AskRoyService;

/// Shared, read-only request state
#[derive(Clone)]
pub struct AppState {
    pub ask_roy: AskRoyService,
}

impl AppState {
    pub fn new(ask_roy: AskRoyService) -> Self {
        Self { ask_roy }
    }
}

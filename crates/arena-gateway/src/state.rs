use std::sync::Arc;

use arena_core::FighterRepository;

#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn FighterRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn FighterRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &dyn FighterRepository {
        self.repository.as_ref()
    }
}

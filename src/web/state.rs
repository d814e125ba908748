use crate::{media::MediaManager, model::ModelManager};

#[derive(Debug, Clone)]
pub struct AppState {
    mm: ModelManager,
    media: MediaManager,
}

impl AppState {
    pub fn new(mm: ModelManager, media: MediaManager) -> Self {
        Self { mm, media }
    }

    pub fn mm(&self) -> &ModelManager {
        &self.mm
    }

    pub fn media(&self) -> &MediaManager {
        &self.media
    }
}

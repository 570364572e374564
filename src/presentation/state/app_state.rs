use std::sync::Arc;

use crate::application::services::DetectionService;

#[derive(Clone)]
pub struct AppState {
    pub detection_service: Arc<DetectionService>,
}

impl AppState {
    pub fn new(detection_service: Arc<DetectionService>) -> Self {
        Self { detection_service }
    }
}

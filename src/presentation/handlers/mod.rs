mod detect;
mod health;

pub use detect::{
    DetectionRequest, DetectionResponse, DetectionStatus, EstimatedCost, ProviderResultBody,
    detect_language_handler,
};
pub use health::{HealthResponse, health_handler};

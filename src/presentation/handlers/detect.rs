use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::{DetectionOutcome, ProviderResult};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct DetectionRequest {
    pub audio_file_path: String,
    // Advisory only; not consumed during detection.
    #[serde(default)]
    pub ground_truth_language: Option<String>,
}

#[derive(Serialize)]
pub struct DetectionResponse {
    pub results: Vec<ProviderResultBody>,
}

#[derive(Serialize)]
pub struct ProviderResultBody {
    pub provider: String,
    pub detected_language: Option<String>,
    pub time_taken: f64,
    pub estimated_cost: EstimatedCost,
    pub status: DetectionStatus,
    pub error_message: Option<String>,
}

#[derive(Serialize)]
pub struct EstimatedCost {
    pub tokens: u64,
    pub dollars: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionStatus {
    Success,
    Error,
}

impl From<ProviderResult> for ProviderResultBody {
    fn from(result: ProviderResult) -> Self {
        let (detected_language, status, error_message) = match result.outcome {
            DetectionOutcome::Success { language } => {
                (Some(language.into_inner()), DetectionStatus::Success, None)
            }
            DetectionOutcome::Error { message } => (None, DetectionStatus::Error, Some(message)),
        };

        Self {
            provider: result.provider,
            detected_language,
            time_taken: result.time_taken,
            estimated_cost: EstimatedCost {
                tokens: result.estimated_cost.tokens,
                dollars: result.estimated_cost.dollars,
            },
            status,
            error_message,
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn detect_language_handler(
    State(state): State<AppState>,
    Json(request): Json<DetectionRequest>,
) -> impl IntoResponse {
    tracing::debug!(
        audio_file_path = %request.audio_file_path,
        "Processing language detection request"
    );

    let results = state.detection_service.detect(&request.audio_file_path).await;

    let results: Vec<ProviderResultBody> =
        results.into_iter().map(ProviderResultBody::from).collect();

    (StatusCode::OK, Json(DetectionResponse { results }))
}

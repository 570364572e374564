use async_trait::async_trait;

use crate::domain::{LanguageCode, UsageCost};

#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub language: LanguageCode,
    pub cost: UsageCost,
}

#[async_trait]
pub trait LanguageDetector: Send + Sync {
    fn provider_name(&self) -> &str;

    async fn detect_language(&self, audio_file_path: &str) -> Result<Detection, DetectorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("missing configuration: {0}")]
    MissingConfiguration(String),
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("audio read failed: {0}")]
    AudioReadFailed(String),
    #[error("network request failed: {0}")]
    RequestFailed(String),
    #[error("api error: {0}")]
    ApiError(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

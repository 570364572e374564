use crate::application::ports::{Detection, DetectorError, LanguageDetector};
use crate::domain::{LanguageCode, UsageCost};

// Stand-in for providers that are not wired up yet.
pub struct MockDetector {
    provider: String,
    language: LanguageCode,
}

impl MockDetector {
    pub fn new(provider: &str, language: LanguageCode) -> Self {
        Self {
            provider: provider.to_string(),
            language,
        }
    }
}

#[async_trait::async_trait]
impl LanguageDetector for MockDetector {
    fn provider_name(&self) -> &str {
        &self.provider
    }

    async fn detect_language(&self, _audio_file_path: &str) -> Result<Detection, DetectorError> {
        Ok(Detection {
            language: self.language.clone(),
            cost: UsageCost::ZERO,
        })
    }
}

use std::sync::Arc;

use crate::application::ports::LanguageDetector;
use crate::domain::LanguageCode;
use crate::presentation::config::DetectorSettings;

use super::gemini_detector::GeminiDetector;
use super::mock_detector::MockDetector;
use super::sarvam_detector::SarvamDetector;

pub struct DetectorFactory;

impl DetectorFactory {
    // Registration order defines response order. A provider missing its
    // credential is still registered and reports a per-call error.
    pub fn create_all(settings: &DetectorSettings) -> Vec<Arc<dyn LanguageDetector>> {
        vec![
            Arc::new(GeminiDetector::new(
                settings.gemini.api_key.clone(),
                settings.gemini.base_url.clone(),
                settings.gemini.model.clone(),
            )),
            Arc::new(SarvamDetector::new(
                settings.sarvam.api_key.clone(),
                settings.sarvam.base_url.clone(),
            )),
            Arc::new(MockDetector::new("OpenAI (Mock)", LanguageCode::new("en"))),
            Arc::new(MockDetector::new(
                "ElevenLabs (Mock)",
                LanguageCode::new("en"),
            )),
        ]
    }
}

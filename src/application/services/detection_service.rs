use std::sync::Arc;
use std::time::Instant;

use futures::future;
use tokio::task::JoinHandle;

use crate::application::ports::LanguageDetector;
use crate::domain::ProviderResult;

pub struct DetectionService {
    detectors: Vec<Arc<dyn LanguageDetector>>,
}

impl DetectionService {
    pub fn new(detectors: Vec<Arc<dyn LanguageDetector>>) -> Self {
        Self { detectors }
    }

    pub async fn detect(&self, audio_file_path: &str) -> Vec<ProviderResult> {
        tracing::debug!(
            providers = self.detectors.len(),
            path = %audio_file_path,
            "Dispatching detection to all providers"
        );

        let handles: Vec<JoinHandle<ProviderResult>> = self
            .detectors
            .iter()
            .map(|detector| {
                let detector = Arc::clone(detector);
                let path = audio_file_path.to_string();
                tokio::spawn(async move { run_detector(detector.as_ref(), &path).await })
            })
            .collect();

        // join_all yields results in spawn order.
        let settled = future::join_all(handles).await;

        let mut results = Vec::with_capacity(self.detectors.len());
        for (joined, detector) in settled.into_iter().zip(&self.detectors) {
            match joined {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::error!(
                        provider = %detector.provider_name(),
                        error = %e,
                        "Detector task aborted"
                    );
                    results.push(ProviderResult::error(
                        detector.provider_name().to_string(),
                        format!("detection task aborted: {}", e),
                        0.0,
                    ));
                }
            }
        }

        let failures = results.iter().filter(|r| !r.is_success()).count();
        tracing::info!(
            providers = results.len(),
            failures = failures,
            "All providers settled"
        );

        results
    }
}

async fn run_detector(detector: &dyn LanguageDetector, audio_file_path: &str) -> ProviderResult {
    let provider = detector.provider_name().to_string();
    let started = Instant::now();
    let outcome = detector.detect_language(audio_file_path).await;
    let elapsed = started.elapsed().as_secs_f64();

    match outcome {
        Ok(detection) => {
            tracing::info!(
                provider = %provider,
                language = %detection.language,
                seconds = elapsed,
                "Provider detection succeeded"
            );
            ProviderResult::success(provider, detection.language, detection.cost, elapsed)
        }
        Err(e) => {
            tracing::warn!(
                provider = %provider,
                error = %e,
                seconds = elapsed,
                "Provider detection failed"
            );
            ProviderResult::error(provider, e.to_string(), elapsed)
        }
    }
}

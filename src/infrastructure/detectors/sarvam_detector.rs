use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{Detection, DetectorError, LanguageDetector};
use crate::domain::{AudioFormat, LanguageCode, UsageCost};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const PROVIDER_NAME: &str = "Sarvam AI";
const API_KEY_VAR: &str = "SARVAM_API_KEY";

pub struct SarvamDetector {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl SarvamDetector {
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.sarvam.ai".to_string()),
        }
    }
}

#[derive(Deserialize)]
struct SpeechToTextResponse {
    language_code: Option<String>,
}

#[async_trait]
impl LanguageDetector for SarvamDetector {
    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn detect_language(&self, audio_file_path: &str) -> Result<Detection, DetectorError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                DetectorError::MissingConfiguration(format!("{} is not set", API_KEY_VAR))
            })?;

        let format = AudioFormat::from_path(audio_file_path)
            .ok_or_else(|| unsupported_file_type(audio_file_path))?;

        let audio_bytes = tokio::fs::read(audio_file_path)
            .await
            .map_err(|e| DetectorError::AudioReadFailed(format!("{}: {}", audio_file_path, e)))?;

        let file_name = Path::new(audio_file_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("audio")
            .to_string();

        let file_part = multipart::Part::bytes(audio_bytes)
            .file_name(file_name)
            .mime_str(format.as_mime())
            .map_err(|e| DetectorError::RequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new().part("file", file_part);

        let url = format!("{}/speech-to-text", self.base_url);

        tracing::debug!(url = %url, "Sending audio to Sarvam speech-to-text");

        let response = self
            .client
            .post(&url)
            .header("api-subscription-key", api_key)
            .multipart(form)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| DetectorError::RequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(DetectorError::ApiError(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: SpeechToTextResponse = response
            .json()
            .await
            .map_err(|e| DetectorError::InvalidResponse(format!("parse response: {}", e)))?;

        let language_code = result
            .language_code
            .filter(|code| !code.trim().is_empty())
            .ok_or_else(|| {
                DetectorError::InvalidResponse("missing or empty language_code".to_string())
            })?;

        let language = LanguageCode::new(&language_code);

        tracing::info!(language = %language, "Sarvam detection completed");

        // Sarvam does not report token usage.
        Ok(Detection {
            language,
            cost: UsageCost::ZERO,
        })
    }
}

fn unsupported_file_type(path: &str) -> DetectorError {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or(path);
    DetectorError::UnsupportedFileType(format!(
        "{} (supported extensions: {})",
        extension,
        AudioFormat::supported_extensions().join(", ")
    ))
}

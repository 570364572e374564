use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::application::ports::{Detection, DetectorError, LanguageDetector};
use crate::domain::{AudioFormat, LanguageCode, UsageCost};

use super::pricing;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const PROVIDER_NAME: &str = "Google Gemini";
const API_KEY_VAR: &str = "GOOGLE_API_KEY";
const INSTRUCTION: &str =
    "Identify the language spoken in this audio. Only return the ISO 639-1 code like 'en' or 'hi'.";

pub struct GeminiDetector {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GeminiDetector {
    pub fn new(api_key: Option<String>, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com".to_string()),
            model: model.unwrap_or_else(|| "gemini-1.5-flash".to_string()),
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
    #[serde(default)]
    total_token_count: u64,
}

#[async_trait]
impl LanguageDetector for GeminiDetector {
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

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![
                    RequestPart {
                        text: Some(INSTRUCTION.to_string()),
                        inline_data: None,
                    },
                    RequestPart {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: format.as_mime().to_string(),
                            data: general_purpose::STANDARD.encode(&audio_bytes),
                        }),
                    },
                ],
            }],
        };

        tracing::debug!(
            model = %self.model,
            bytes = audio_bytes.len(),
            "Sending audio to Gemini"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
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

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| DetectorError::InvalidResponse(format!("parse response: {}", e)))?;

        let text = result
            .candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .and_then(|part| part.text.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                DetectorError::InvalidResponse("no usable text in first candidate".to_string())
            })?;

        let language = LanguageCode::new(text);
        let cost = match result.usage_metadata {
            Some(usage) => UsageCost::new(
                usage.total_token_count,
                pricing::gemini_flash_cost(usage.prompt_token_count, usage.candidates_token_count),
            ),
            None => UsageCost::ZERO,
        };

        tracing::info!(
            language = %language,
            tokens = cost.tokens,
            "Gemini detection completed"
        );

        Ok(Detection { language, cost })
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

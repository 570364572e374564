use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use langgate::application::ports::{DetectorError, LanguageDetector};
use langgate::infrastructure::detectors::GeminiDetector;

async fn start_mock_gemini_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/v1beta/models/{model_call}",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn write_temp_audio(extension: &str) -> tempfile::TempPath {
    let file = tempfile::Builder::new()
        .suffix(&format!(".{}", extension))
        .tempfile()
        .unwrap();
    std::fs::write(file.path(), b"fake audio bytes").unwrap();
    file.into_temp_path()
}

#[tokio::test]
async fn given_valid_audio_when_gemini_detects_then_returns_language_and_cost() {
    let response_body = r#"{
        "candidates": [
            {"content": {"parts": [{"text": "hi\n"}]}}
        ],
        "usageMetadata": {
            "promptTokenCount": 1000,
            "candidatesTokenCount": 10,
            "totalTokenCount": 1010
        }
    }"#;
    let (base_url, shutdown_tx) = start_mock_gemini_server(200, response_body).await;

    let audio = write_temp_audio("wav");
    let detector = GeminiDetector::new(Some("test-key".to_string()), Some(base_url), None);

    let result = detector.detect_language(audio.to_str().unwrap()).await;

    let detection = result.unwrap();
    assert_eq!(detection.language.as_str(), "hi");
    assert_eq!(detection.cost.tokens, 1010);
    assert_eq!(detection.cost.dollars, 0.000078);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_api_key_when_detecting_then_returns_missing_configuration() {
    let audio = write_temp_audio("wav");
    let detector = GeminiDetector::new(None, None, None);

    let result = detector.detect_language(audio.to_str().unwrap()).await;

    assert!(matches!(
        result,
        Err(DetectorError::MissingConfiguration(_))
    ));
}

#[tokio::test]
async fn given_empty_api_key_when_detecting_then_returns_missing_configuration() {
    let audio = write_temp_audio("wav");
    let detector = GeminiDetector::new(Some(String::new()), None, None);

    let result = detector.detect_language(audio.to_str().unwrap()).await;

    assert!(matches!(
        result,
        Err(DetectorError::MissingConfiguration(_))
    ));
}

#[tokio::test]
async fn given_unsupported_extension_when_detecting_then_returns_unsupported_file_type() {
    let audio = write_temp_audio("txt");
    let detector = GeminiDetector::new(Some("test-key".to_string()), None, None);

    let result = detector.detect_language(audio.to_str().unwrap()).await;

    match result {
        Err(DetectorError::UnsupportedFileType(message)) => {
            assert!(message.contains("txt"));
            assert!(message.contains("wav"));
        }
        other => panic!("expected UnsupportedFileType, got {:?}", other),
    }
}

#[tokio::test]
async fn given_missing_file_when_detecting_then_returns_audio_read_failed() {
    let detector = GeminiDetector::new(Some("test-key".to_string()), None, None);

    let result = detector
        .detect_language("/nonexistent/recording.wav")
        .await;

    assert!(matches!(result, Err(DetectorError::AudioReadFailed(_))));
}

#[tokio::test]
async fn given_api_error_status_when_detecting_then_returns_api_error() {
    let response_body = r#"{"error": {"code": 500, "message": "internal"}}"#;
    let (base_url, shutdown_tx) = start_mock_gemini_server(500, response_body).await;

    let audio = write_temp_audio("mp3");
    let detector = GeminiDetector::new(Some("test-key".to_string()), Some(base_url), None);

    let result = detector.detect_language(audio.to_str().unwrap()).await;

    match result {
        Err(DetectorError::ApiError(message)) => {
            assert!(message.contains("500"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_malformed_json_when_detecting_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_gemini_server(200, "not json at all").await;

    let audio = write_temp_audio("wav");
    let detector = GeminiDetector::new(Some("test-key".to_string()), Some(base_url), None);

    let result = detector.detect_language(audio.to_str().unwrap()).await;

    assert!(matches!(result, Err(DetectorError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_candidates_when_detecting_then_returns_invalid_response() {
    let response_body = r#"{"candidates": []}"#;
    let (base_url, shutdown_tx) = start_mock_gemini_server(200, response_body).await;

    let audio = write_temp_audio("wav");
    let detector = GeminiDetector::new(Some("test-key".to_string()), Some(base_url), None);

    let result = detector.detect_language(audio.to_str().unwrap()).await;

    assert!(matches!(result, Err(DetectorError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_whitespace_only_text_when_detecting_then_returns_invalid_response() {
    let response_body = r#"{
        "candidates": [
            {"content": {"parts": [{"text": "\n"}]}}
        ],
        "usageMetadata": {
            "promptTokenCount": 990,
            "candidatesTokenCount": 10,
            "totalTokenCount": 1000
        }
    }"#;
    let (base_url, shutdown_tx) = start_mock_gemini_server(200, response_body).await;

    let audio = write_temp_audio("wav");
    let detector = GeminiDetector::new(Some("test-key".to_string()), Some(base_url), None);

    let result = detector.detect_language(audio.to_str().unwrap()).await;

    assert!(matches!(result, Err(DetectorError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_usage_when_detecting_then_cost_is_zero() {
    let response_body = r#"{
        "candidates": [
            {"content": {"parts": [{"text": "en"}]}}
        ]
    }"#;
    let (base_url, shutdown_tx) = start_mock_gemini_server(200, response_body).await;

    let audio = write_temp_audio("wav");
    let detector = GeminiDetector::new(Some("test-key".to_string()), Some(base_url), None);

    let result = detector.detect_language(audio.to_str().unwrap()).await;

    let detection = result.unwrap();
    assert_eq!(detection.language.as_str(), "en");
    assert_eq!(detection.cost.tokens, 0);
    assert_eq!(detection.cost.dollars, 0.0);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_server_when_detecting_then_returns_request_failed() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let audio = write_temp_audio("wav");
    let detector = GeminiDetector::new(Some("test-key".to_string()), Some(base_url), None);

    let result = detector.detect_language(audio.to_str().unwrap()).await;

    assert!(matches!(result, Err(DetectorError::RequestFailed(_))));
}

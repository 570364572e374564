use langgate::domain::{LanguageCode, ProviderResult, UsageCost};
use langgate::presentation::handlers::{DetectionRequest, ProviderResultBody};

#[test]
fn given_successful_result_when_mapped_to_wire_then_language_is_present() {
    let result = ProviderResult::success(
        "Google Gemini".to_string(),
        LanguageCode::new("hi"),
        UsageCost::new(1010, 0.000078),
        1.87,
    );

    let body = ProviderResultBody::from(result);
    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(json["provider"], "Google Gemini");
    assert_eq!(json["status"], "success");
    assert_eq!(json["detected_language"], "hi");
    assert!(json["error_message"].is_null());
    assert_eq!(json["time_taken"], 1.87);
    assert_eq!(json["estimated_cost"]["tokens"], 1010);
    assert_eq!(json["estimated_cost"]["dollars"], 0.000078);
}

#[test]
fn given_failed_result_when_mapped_to_wire_then_error_is_present() {
    let result = ProviderResult::error(
        "Sarvam AI".to_string(),
        "SARVAM_API_KEY is not set".to_string(),
        0.02,
    );

    let body = ProviderResultBody::from(result);
    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(json["status"], "error");
    assert!(json["detected_language"].is_null());
    assert_eq!(json["error_message"], "SARVAM_API_KEY is not set");
    assert_eq!(json["estimated_cost"]["tokens"], 0);
    assert_eq!(json["estimated_cost"]["dollars"], 0.0);
}

#[test]
fn given_wire_body_when_serialized_then_exposes_expected_field_set() {
    let result = ProviderResult::success(
        "OpenAI (Mock)".to_string(),
        LanguageCode::new("en"),
        UsageCost::ZERO,
        0.0,
    );

    let json = serde_json::to_value(ProviderResultBody::from(result)).unwrap();
    let fields = json.as_object().unwrap();

    for key in [
        "provider",
        "detected_language",
        "time_taken",
        "estimated_cost",
        "status",
        "error_message",
    ] {
        assert!(fields.contains_key(key), "missing field {}", key);
    }
    assert_eq!(fields.len(), 6);
}

#[test]
fn given_request_without_ground_truth_when_deserialized_then_field_is_none() {
    let request: DetectionRequest =
        serde_json::from_str(r#"{"audio_file_path": "/tmp/sample.wav"}"#).unwrap();

    assert_eq!(request.audio_file_path, "/tmp/sample.wav");
    assert!(request.ground_truth_language.is_none());
}

#[test]
fn given_request_with_ground_truth_when_deserialized_then_field_is_kept() {
    let request: DetectionRequest = serde_json::from_str(
        r#"{"audio_file_path": "/tmp/sample.wav", "ground_truth_language": "hi"}"#,
    )
    .unwrap();

    assert_eq!(request.ground_truth_language.as_deref(), Some("hi"));
}

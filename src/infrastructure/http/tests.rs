//! HTTP API 端到端测试（使用内存能力客户端）

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use super::server::build_router;
use super::state::{AppState, GatewaySettings};
use crate::application::ports::CapabilityError;
use crate::domain::TextAnnotation;
use crate::infrastructure::adapters::{FakeSpeechRecognizer, FakeTextDetector, FakeTranslator};

const BOUNDARY: &str = "langbridge-test-boundary";
const BODY_LIMIT: usize = 64 * 1024;

struct Harness {
    translator: Arc<FakeTranslator>,
    recognizer: Arc<FakeSpeechRecognizer>,
    detector: Arc<FakeTextDetector>,
}

impl Harness {
    fn new(
        translator: FakeTranslator,
        recognizer: FakeSpeechRecognizer,
        detector: FakeTextDetector,
    ) -> Self {
        Self {
            translator: Arc::new(translator),
            recognizer: Arc::new(recognizer),
            detector: Arc::new(detector),
        }
    }

    fn with_translator(translator: FakeTranslator) -> Self {
        Self::new(
            translator,
            FakeSpeechRecognizer::silent(),
            FakeTextDetector::blank(),
        )
    }

    fn router(&self) -> Router {
        let state = AppState::new(
            self.translator.clone(),
            self.recognizer.clone(),
            self.detector.clone(),
            GatewaySettings::default(),
        );
        build_router(Arc::new(state), BODY_LIMIT)
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router().oneshot(request).await.unwrap()
    }
}

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, file_name, data) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        name, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let harness = Harness::with_translator(FakeTranslator::new());
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = harness.send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"status": "ok", "message": "LangbridgAI Backend is running!"})
    );
}

#[tokio::test]
async fn test_health_check_ignores_failing_capabilities() {
    let harness = Harness::new(
        FakeTranslator::failing(CapabilityError::Timeout),
        FakeSpeechRecognizer::failing(CapabilityError::Timeout),
        FakeTextDetector::failing(CapabilityError::Timeout),
    );
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = harness.send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

// ============================================================================
// Text
// ============================================================================

#[tokio::test]
async fn test_translate_text() {
    let harness = Harness::with_translator(FakeTranslator::with_reply("안녕하세요"));

    let response = harness
        .send(json_request(
            "/translate/text",
            json!({"text": "Hello", "from_lang": "en", "to_lang": "ko"}),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"translated_text": "안녕하세요"}));

    let calls = harness.translator.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].source_language.as_deref(), Some("en"));
    assert_eq!(calls[0].target_language, "ko");
}

#[tokio::test]
async fn test_translate_text_uses_default_languages() {
    let harness = Harness::with_translator(FakeTranslator::new());

    let response = harness
        .send(json_request("/translate/text", json!({"text": "Good night"})))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"translated_text": "[ko] Good night"})
    );
    assert_eq!(
        harness.translator.calls()[0].source_language.as_deref(),
        Some("en")
    );
}

#[tokio::test]
async fn test_translate_empty_text_skips_translator() {
    let harness = Harness::with_translator(FakeTranslator::new());

    let response = harness
        .send(json_request("/translate/text", json!({"text": ""})))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"translated_text": ""}));
    assert_eq!(harness.translator.call_count(), 0);
}

#[tokio::test]
async fn test_translate_text_upstream_failure_is_500() {
    let harness = Harness::with_translator(FakeTranslator::failing(CapabilityError::service(
        400,
        "Invalid Value",
    )));

    let response = harness
        .send(json_request(
            "/translate/text",
            json!({"text": "Hello", "to_lang": "xx"}),
        ))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let detail = body_json(response).await["detail"].as_str().unwrap().to_string();
    assert!(detail.starts_with("Text translation failed: "));
    assert!(detail.contains("Invalid Value"));
}

#[tokio::test]
async fn test_translate_text_requires_text_field() {
    let harness = Harness::with_translator(FakeTranslator::new());

    let response = harness
        .send(json_request("/translate/text", json!({"from_lang": "en"})))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(harness.translator.call_count(), 0);
}

// ============================================================================
// Speech
// ============================================================================

#[tokio::test]
async fn test_translate_speech_no_speech_sentinel() {
    let harness = Harness::new(
        FakeTranslator::new(),
        FakeSpeechRecognizer::silent(),
        FakeTextDetector::blank(),
    );

    let response = harness
        .send(multipart_request(
            "/translate/speech",
            &[Part::File("audio_file", "silence.wav", &[0u8; 320])],
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"transcribed_text": "", "translated_text": "No speech detected or transcribed."})
    );
    assert_eq!(harness.translator.call_count(), 0);
}

#[tokio::test]
async fn test_translate_speech_joins_results() {
    let harness = Harness::new(
        FakeTranslator::with_reply("안녕 세상"),
        FakeSpeechRecognizer::with_transcripts(["hello", "world"]),
        FakeTextDetector::blank(),
    );

    let response = harness
        .send(multipart_request(
            "/translate/speech",
            &[Part::File("audio_file", "hello.wav", &[1u8; 640])],
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"transcribed_text": "hello world", "translated_text": "안녕 세상"})
    );

    let calls = harness.translator.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].text, "hello world");

    let recognized = harness.recognizer.calls();
    assert_eq!(recognized.len(), 1);
    assert_eq!(recognized[0].audio.len(), 640);
    assert_eq!(recognized[0].encoding, "LINEAR16");
    assert_eq!(recognized[0].sample_rate_hertz, 16000);
}

#[tokio::test]
async fn test_translate_speech_languages_from_form_fields() {
    let harness = Harness::new(
        FakeTranslator::new(),
        FakeSpeechRecognizer::with_transcripts(["bonjour"]),
        FakeTextDetector::blank(),
    );

    let response = harness
        .send(multipart_request(
            "/translate/speech?from_lang=de&to_lang=es",
            &[
                Part::File("audio_file", "bonjour.wav", &[1u8; 64]),
                Part::Text("from_lang", "fr"),
                Part::Text("to_lang", "ja"),
            ],
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(harness.recognizer.calls()[0].language_code, "fr");
    let calls = harness.translator.calls();
    assert_eq!(calls[0].source_language.as_deref(), Some("fr"));
    assert_eq!(calls[0].target_language, "ja");
}

#[tokio::test]
async fn test_translate_speech_languages_from_query() {
    let harness = Harness::new(
        FakeTranslator::new(),
        FakeSpeechRecognizer::with_transcripts(["hola"]),
        FakeTextDetector::blank(),
    );

    let response = harness
        .send(multipart_request(
            "/translate/speech?from_lang=es&to_lang=en",
            &[Part::File("audio_file", "hola.wav", &[1u8; 64])],
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"transcribed_text": "hola", "translated_text": "[en] hola"})
    );
    assert_eq!(harness.recognizer.calls()[0].language_code, "es");
}

#[tokio::test]
async fn test_translate_speech_blank_form_languages_fall_back_to_query() {
    let harness = Harness::new(
        FakeTranslator::new(),
        FakeSpeechRecognizer::with_transcripts(["bonjour"]),
        FakeTextDetector::blank(),
    );

    let response = harness
        .send(multipart_request(
            "/translate/speech?from_lang=fr&to_lang=ja",
            &[
                Part::File("audio_file", "bonjour.wav", &[1u8; 64]),
                Part::Text("from_lang", ""),
                Part::Text("to_lang", " "),
            ],
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(harness.recognizer.calls()[0].language_code, "fr");
    let calls = harness.translator.calls();
    assert_eq!(calls[0].source_language.as_deref(), Some("fr"));
    assert_eq!(calls[0].target_language, "ja");
}

#[tokio::test]
async fn test_translate_speech_requires_audio_file() {
    let harness = Harness::with_translator(FakeTranslator::new());

    let response = harness
        .send(multipart_request(
            "/translate/speech",
            &[Part::Text("from_lang", "en")],
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await,
        json!({"detail": "Field required: audio_file"})
    );
    assert_eq!(harness.recognizer.call_count(), 0);
}

#[tokio::test]
async fn test_translate_speech_upstream_failure_is_500() {
    let harness = Harness::new(
        FakeTranslator::new(),
        FakeSpeechRecognizer::failing(CapabilityError::service(
            400,
            "Invalid audio channel count",
        )),
        FakeTextDetector::blank(),
    );

    let response = harness
        .send(multipart_request(
            "/translate/speech",
            &[Part::File("audio_file", "stereo.wav", &[1u8; 64])],
        ))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let detail = body_json(response).await["detail"].as_str().unwrap().to_string();
    assert!(detail.contains("Invalid audio channel count"));
    assert!(detail.ends_with("Ensure audio encoding and sample rate are correct."));
    assert_eq!(harness.translator.call_count(), 0);
}

#[tokio::test]
async fn test_translate_speech_rejects_oversized_upload() {
    let harness = Harness::with_translator(FakeTranslator::new());
    let audio = vec![0u8; BODY_LIMIT * 2];

    let response = harness
        .send(multipart_request(
            "/translate/speech",
            &[Part::File("audio_file", "long.wav", &audio)],
        ))
        .await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(harness.recognizer.call_count(), 0);
}

// ============================================================================
// Image
// ============================================================================

#[tokio::test]
async fn test_translate_image_no_text_sentinel() {
    let harness = Harness::new(
        FakeTranslator::new(),
        FakeSpeechRecognizer::silent(),
        FakeTextDetector::blank(),
    );

    let response = harness
        .send(multipart_request(
            "/translate/image",
            &[Part::File("image_file", "blank.png", b"\x89PNG")],
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"extracted_text": "", "translated_text": "No text found in the image."})
    );
    assert_eq!(harness.translator.call_count(), 0);
}

#[tokio::test]
async fn test_translate_image_uses_first_annotation() {
    let harness = Harness::new(
        FakeTranslator::with_reply("안녕하세요"),
        FakeSpeechRecognizer::silent(),
        FakeTextDetector::new(vec![
            TextAnnotation::new("Bonjour"),
            TextAnnotation::new("Bon"),
            TextAnnotation::new("jour"),
        ]),
    );

    let response = harness
        .send(multipart_request(
            "/translate/image?from_lang=fr",
            &[Part::File("image_file", "sign.jpg", b"\xFF\xD8\xFF")],
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"extracted_text": "Bonjour", "translated_text": "안녕하세요"})
    );

    let calls = harness.translator.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].text, "Bonjour");
    assert_eq!(calls[0].source_language.as_deref(), Some("fr"));
    assert_eq!(harness.detector.calls(), vec![3]);
}

#[tokio::test]
async fn test_translate_image_upstream_failure_is_500() {
    let harness = Harness::new(
        FakeTranslator::new(),
        FakeSpeechRecognizer::silent(),
        FakeTextDetector::failing(CapabilityError::Network("connection refused".to_string())),
    );

    let response = harness
        .send(multipart_request(
            "/translate/image",
            &[Part::File("image_file", "sign.png", b"\x89PNG")],
        ))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"detail": "Image translation failed: Network error: connection refused"})
    );
}

#[tokio::test]
async fn test_translate_image_requires_image_file() {
    let harness = Harness::with_translator(FakeTranslator::new());

    let response = harness
        .send(multipart_request(
            "/translate/image",
            &[Part::File("audio_file", "wrong.wav", &[0u8; 8])],
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(harness.detector.call_count(), 0);
}

//! Google Speech Client - Cloud Speech-to-Text API v1p1beta1
//!
//! POST {base_url}/v1p1beta1/speech:recognize
//! Request: {"config": {...}, "audio": {"content": "<base64>"}}
//! Response: {"results": [{"alternatives": [{"transcript": "...", "confidence": 0.9}]}]}
//!
//! 同步识别接口，适合短音频（约 1 分钟以内）

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{read_json, GoogleAuth};
use crate::application::ports::{CapabilityError, RecognitionRequest, SpeechRecognitionPort};
use crate::domain::{SpeechAlternative, SpeechResult};

#[derive(Debug, Serialize)]
struct RecognizeHttpRequest<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    encoding: &'a str,
    sample_rate_hertz: u32,
    language_code: &'a str,
    enable_automatic_punctuation: bool,
}

#[derive(Debug, Serialize)]
struct RecognitionAudio {
    content: String,
}

/// 没有识别到语音时 Google 会省略 results 字段
#[derive(Debug, Default, Deserialize)]
struct RecognizeHttpResponse {
    #[serde(default)]
    results: Vec<HttpSpeechResult>,
}

#[derive(Debug, Deserialize)]
struct HttpSpeechResult {
    #[serde(default)]
    alternatives: Vec<HttpAlternative>,
}

#[derive(Debug, Deserialize)]
struct HttpAlternative {
    #[serde(default)]
    transcript: String,
    confidence: Option<f32>,
}

impl From<RecognizeHttpResponse> for Vec<SpeechResult> {
    fn from(response: RecognizeHttpResponse) -> Self {
        response
            .results
            .into_iter()
            .map(|r| SpeechResult {
                alternatives: r
                    .alternatives
                    .into_iter()
                    .map(|a| SpeechAlternative {
                        transcript: a.transcript,
                        confidence: a.confidence,
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Google Speech-to-Text 客户端
pub struct GoogleSpeechClient {
    http: Client,
    auth: Arc<GoogleAuth>,
    base_url: String,
}

impl GoogleSpeechClient {
    pub fn new(http: Client, auth: Arc<GoogleAuth>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            auth,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn recognize_url(&self) -> String {
        format!("{}/v1p1beta1/speech:recognize", self.base_url)
    }
}

#[async_trait]
impl SpeechRecognitionPort for GoogleSpeechClient {
    async fn recognize(
        &self,
        request: RecognitionRequest,
    ) -> Result<Vec<SpeechResult>, CapabilityError> {
        let body = RecognizeHttpRequest {
            config: RecognitionConfig {
                encoding: &request.encoding,
                sample_rate_hertz: request.sample_rate_hertz,
                language_code: &request.language_code,
                enable_automatic_punctuation: request.enable_automatic_punctuation,
            },
            audio: RecognitionAudio {
                content: base64::engine::general_purpose::STANDARD.encode(&request.audio),
            },
        };

        tracing::debug!(
            url = %self.recognize_url(),
            audio_size = request.audio.len(),
            encoding = %request.encoding,
            sample_rate = request.sample_rate_hertz,
            language = %request.language_code,
            "Sending speech recognize request"
        );

        let builder = self.http.post(self.recognize_url()).json(&body);
        let response = self.auth.authorize(builder).await?.send().await?;
        let parsed: RecognizeHttpResponse = read_json(response).await?;

        Ok(parsed.into())
    }
}

//! Google Translate Client - Cloud Translation API v2
//!
//! POST {base_url}/language/translate/v2
//! Request: {"q": "...", "target": "ko", "source": "en", "model": "nmt", "format": "text"}
//! Response: {"data": {"translations": [{"translatedText": "..."}]}}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{read_json, GoogleAuth};
use crate::application::ports::{CapabilityError, TranslationPort, TranslationRequest};

#[derive(Debug, Serialize)]
struct TranslateHttpRequest<'a> {
    q: &'a str,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    model: &'a str,
    /// 纯文本，避免译文中出现 HTML 实体
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateHttpResponse {
    data: TranslationList,
}

#[derive(Debug, Deserialize)]
struct TranslationList {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

/// Google Translate 客户端
pub struct GoogleTranslateClient {
    http: Client,
    auth: Arc<GoogleAuth>,
    base_url: String,
}

impl GoogleTranslateClient {
    pub fn new(http: Client, auth: Arc<GoogleAuth>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            auth,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn translate_url(&self) -> String {
        format!("{}/language/translate/v2", self.base_url)
    }
}

#[async_trait]
impl TranslationPort for GoogleTranslateClient {
    async fn translate(&self, request: TranslationRequest) -> Result<String, CapabilityError> {
        let body = TranslateHttpRequest {
            q: &request.text,
            target: &request.target_language,
            source: request.source_language.as_deref(),
            model: &request.model,
            format: "text",
        };

        tracing::debug!(
            url = %self.translate_url(),
            text_len = request.text.len(),
            source = ?request.source_language,
            target = %request.target_language,
            "Sending translate request"
        );

        let builder = self.http.post(self.translate_url()).json(&body);
        let response = self.auth.authorize(builder).await?.send().await?;
        let parsed: TranslateHttpResponse = read_json(response).await?;

        first_translation(parsed)
    }
}

/// 单条文本只取第一条译文
fn first_translation(response: TranslateHttpResponse) -> Result<String, CapabilityError> {
    response
        .data
        .translations
        .into_iter()
        .next()
        .map(|t| t.translated_text)
        .ok_or_else(|| CapabilityError::InvalidResponse("No translations in response".to_string()))
}

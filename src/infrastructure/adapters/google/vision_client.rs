//! Google Vision Client - Cloud Vision API v1 (TEXT_DETECTION)
//!
//! POST {base_url}/v1/images:annotate
//! Request: {"requests": [{"image": {"content": "<base64>"}, "features": [{"type": "TEXT_DETECTION"}]}]}
//! Response: {"responses": [{"textAnnotations": [{"description": "...", "locale": "fr"}, ...]}]}

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{embedded_error, read_json, GoogleAuth, GoogleErrorBody};
use crate::application::ports::{CapabilityError, TextDetectionPort};
use crate::domain::TextAnnotation;

#[derive(Debug, Serialize)]
struct AnnotateHttpRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
struct AnnotateImageRequest {
    image: ImageContent,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
struct ImageContent {
    content: String,
}

#[derive(Debug, Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct AnnotateHttpResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    text_annotations: Vec<HttpTextAnnotation>,
    /// 单张图片的处理错误，HTTP 状态仍为 200
    error: Option<GoogleErrorBody>,
}

#[derive(Debug, Deserialize)]
struct HttpTextAnnotation {
    #[serde(default)]
    description: String,
    locale: Option<String>,
}

/// Google Vision 客户端
pub struct GoogleVisionClient {
    http: Client,
    auth: Arc<GoogleAuth>,
    base_url: String,
}

impl GoogleVisionClient {
    pub fn new(http: Client, auth: Arc<GoogleAuth>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            auth,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn annotate_url(&self) -> String {
        format!("{}/v1/images:annotate", self.base_url)
    }
}

#[async_trait]
impl TextDetectionPort for GoogleVisionClient {
    async fn detect_text(&self, image: Vec<u8>) -> Result<Vec<TextAnnotation>, CapabilityError> {
        let body = AnnotateHttpRequest {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: base64::engine::general_purpose::STANDARD.encode(&image),
                },
                features: vec![Feature {
                    kind: "TEXT_DETECTION",
                }],
            }],
        };

        tracing::debug!(
            url = %self.annotate_url(),
            image_size = image.len(),
            "Sending text detection request"
        );

        let builder = self.http.post(self.annotate_url()).json(&body);
        let response = self.auth.authorize(builder).await?.send().await?;
        let parsed: AnnotateHttpResponse = read_json(response).await?;

        into_annotations(parsed)
    }
}

/// 只发送了一张图片，只取第一条响应；注释顺序保持不变（第一条为聚合文本）
fn into_annotations(response: AnnotateHttpResponse) -> Result<Vec<TextAnnotation>, CapabilityError> {
    let Some(image_response) = response.responses.into_iter().next() else {
        return Ok(Vec::new());
    };

    if let Some(error) = image_response.error {
        return Err(embedded_error(error));
    }

    Ok(image_response
        .text_annotations
        .into_iter()
        .map(|a| TextAnnotation {
            description: a.description,
            locale: a.locale,
        })
        .collect())
}

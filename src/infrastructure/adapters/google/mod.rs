//! Google Cloud Adapters - 调用 Google Cloud REST API
//!
//! - Translation v2: 文本翻译
//! - Speech-to-Text v1p1beta1: 语音识别
//! - Vision v1: 图片文字检测
//!
//! 三个客户端共享一个 reqwest::Client 和一个 GoogleAuth

mod auth;
mod speech_client;
mod translate_client;
mod vision_client;

pub use auth::{Credentials, GoogleAuth};
pub use speech_client::GoogleSpeechClient;
pub use translate_client::GoogleTranslateClient;
pub use vision_client::GoogleVisionClient;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::application::ports::CapabilityError;

/// 创建共享 HTTP 客户端
pub fn build_http_client(timeout_secs: u64) -> Result<Client, CapabilityError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| CapabilityError::Network(e.to_string()))
}

/// Google API 错误信封: `{"error": {"code": 400, "message": "...", "status": "INVALID_ARGUMENT"}}`
#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GoogleErrorBody {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: String,
}

/// 检查响应状态并解析 JSON
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, CapabilityError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_from_body(status.as_u16(), &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| CapabilityError::InvalidResponse(e.to_string()))
}

/// 将非 2xx 响应转换为错误，尽量保留上游原始错误消息
fn error_from_body(status: u16, body: &str) -> CapabilityError {
    let message = serde_json::from_str::<GoogleErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        401 | 403 => CapabilityError::Auth(message),
        _ => CapabilityError::service(status, message),
    }
}

/// 响应体内嵌的错误（HTTP 200 但单项失败，如 Vision 的逐图片错误）
pub(crate) fn embedded_error(error: GoogleErrorBody) -> CapabilityError {
    let code = error.code.and_then(|c| u16::try_from(c).ok()).unwrap_or(0);
    CapabilityError::service(code, error.message)
}

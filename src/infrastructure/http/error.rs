//! HTTP Error Handling
//!
//! 错误响应体统一为 `{"detail": "..."}`

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求体无法解析
    BadRequest(String),
    /// 缺少必填字段
    UnprocessableEntity(String),
    /// 上传超过请求体大小限制
    PayloadTooLarge(String),
    /// 上游失败及其他服务端错误
    Internal(String),
}

impl ApiError {
    /// multipart 读取错误，沿用 axum 给出的状态码（超限为 413，其余为 400）
    pub fn from_multipart(context: &str, e: MultipartError) -> Self {
        let message = format!("{}: {}", context, e.body_text());
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(message)
        } else {
            ApiError::BadRequest(message)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::UnprocessableEntity(msg) => {
                tracing::warn!(error = %msg, "Unprocessable request");
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            ApiError::PayloadTooLarge(msg) => {
                tracing::warn!(error = %msg, "Upload too large");
                (StatusCode::PAYLOAD_TOO_LARGE, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Translation request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::UpstreamFailure { .. } => ApiError::Internal(e.to_string()),
        }
    }
}

//! Capability Error - 外部能力调用错误

use thiserror::Error;

/// 外部能力提供方返回的错误
///
/// 到达应用层后统一视为上游失败，不区分种类
#[derive(Debug, Clone, Error)]
pub enum CapabilityError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Authentication error: {0}")]
    Auth(String),

    /// 上游拒绝请求，code 为 HTTP 状态码或响应体内嵌的错误码
    #[error("Service error ({code}): {message}")]
    Service { code: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl CapabilityError {
    pub fn service(code: u16, message: impl Into<String>) -> Self {
        Self::Service {
            code,
            message: message.into(),
        }
    }
}

/// 错误文本不携带请求 URL，URL 中可能含有 API Key
impl From<reqwest::Error> for CapabilityError {
    fn from(e: reqwest::Error) -> Self {
        let e = e.without_url();
        if e.is_timeout() {
            CapabilityError::Timeout
        } else if e.is_connect() {
            CapabilityError::Network(format!("Cannot connect to capability provider: {}", e))
        } else if e.is_decode() {
            CapabilityError::InvalidResponse(e.to_string())
        } else {
            CapabilityError::Network(e.to_string())
        }
    }
}

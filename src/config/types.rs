//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 能力提供方选择
    #[serde(default)]
    pub capabilities: CapabilitiesConfig,

    /// Google Cloud 配置
    #[serde(default)]
    pub google: GoogleConfig,

    /// 翻译配置
    #[serde(default)]
    pub translation: TranslationConfig,

    /// 语音识别配置
    #[serde(default)]
    pub speech: SpeechConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 上传请求体最大大小（字节）
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_upload_bytes() -> usize {
    20 * 1024 * 1024 // 20 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 能力提供方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Google Cloud Translation / Speech-to-Text / Vision
    #[default]
    Google,
    /// 内存实现，本地开发用
    Fake,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Google => write!(f, "google"),
            Provider::Fake => write!(f, "fake"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CapabilitiesConfig {
    #[serde(default)]
    pub provider: Provider,
}

/// Google Cloud 配置
///
/// 认证方式按优先级：api_key > access_token > 元数据服务器（服务账号）
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    /// 项目 ID，未设置时回退到 GOOGLE_CLOUD_PROJECT
    #[serde(default)]
    pub project_id: Option<String>,

    /// API Key
    #[serde(default)]
    pub api_key: Option<String>,

    /// 固定的 OAuth2 访问令牌
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default = "default_translate_base_url")]
    pub translate_base_url: String,

    #[serde(default = "default_speech_base_url")]
    pub speech_base_url: String,

    #[serde(default = "default_vision_base_url")]
    pub vision_base_url: String,

    /// GCE / Cloud Run 元数据服务器
    #[serde(default = "default_metadata_base_url")]
    pub metadata_base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_google_timeout")]
    pub timeout_secs: u64,
}

fn default_translate_base_url() -> String {
    "https://translation.googleapis.com".to_string()
}

fn default_speech_base_url() -> String {
    "https://speech.googleapis.com".to_string()
}

fn default_vision_base_url() -> String {
    "https://vision.googleapis.com".to_string()
}

fn default_metadata_base_url() -> String {
    "http://metadata.google.internal".to_string()
}

fn default_google_timeout() -> u64 {
    60
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            api_key: None,
            access_token: None,
            translate_base_url: default_translate_base_url(),
            speech_base_url: default_speech_base_url(),
            vision_base_url: default_vision_base_url(),
            metadata_base_url: default_metadata_base_url(),
            timeout_secs: default_google_timeout(),
        }
    }
}

impl GoogleConfig {
    /// 认证方式描述（不含密钥）
    pub fn auth_mode(&self) -> &'static str {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());

        if present(&self.api_key) {
            "api_key"
        } else if present(&self.access_token) {
            "access_token"
        } else {
            "metadata_server"
        }
    }
}

/// 翻译配置
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    /// 翻译模型，nmt = 神经机器翻译
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_source")]
    pub default_source: String,

    #[serde(default = "default_target")]
    pub default_target: String,
}

fn default_model() -> String {
    "nmt".to_string()
}

fn default_source() -> String {
    "en".to_string()
}

fn default_target() -> String {
    "ko".to_string()
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            default_source: default_source(),
            default_target: default_target(),
        }
    }
}

/// 语音识别配置
///
/// 所有语音请求都使用同一编码和采样率，不做格式探测
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// 音频编码，如 LINEAR16、FLAC、OGG_OPUS
    #[serde(default = "default_encoding")]
    pub encoding: String,

    /// 采样率（Hz）
    #[serde(default = "default_sample_rate")]
    pub sample_rate_hertz: u32,
}

fn default_encoding() -> String {
    "LINEAR16".to_string()
}

fn default_sample_rate() -> u32 {
    16000
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            encoding: default_encoding(),
            sample_rate_hertz: default_sample_rate(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.capabilities.provider, Provider::Google);
        assert_eq!(config.translation.model, "nmt");
        assert_eq!(config.speech.encoding, "LINEAR16");
        assert_eq!(config.speech.sample_rate_hertz, 16000);
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_auth_mode_priority() {
        let mut config = GoogleConfig::default();
        assert_eq!(config.auth_mode(), "metadata_server");

        config.access_token = Some("token".to_string());
        assert_eq!(config.auth_mode(), "access_token");

        config.api_key = Some("key".to_string());
        assert_eq!(config.auth_mode(), "api_key");
    }

    #[test]
    fn test_auth_mode_ignores_empty_credentials() {
        let mut config = GoogleConfig::default();
        config.api_key = Some(String::new());
        assert_eq!(config.auth_mode(), "metadata_server");

        config.access_token = Some("token".to_string());
        assert_eq!(config.auth_mode(), "access_token");
    }
}

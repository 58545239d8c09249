//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 托管平台环境变量（`PORT`、`GOOGLE_CLOUD_PROJECT`）
//! 2. 环境变量（前缀 `LANGBRIDGE_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `LANGBRIDGE_SERVER__PORT=8080`
/// - `LANGBRIDGE_CAPABILITIES__PROVIDER=fake`
/// - `LANGBRIDGE_GOOGLE__API_KEY=...`
/// - `LANGBRIDGE_SPEECH__SAMPLE_RATE_HERTZ=44100`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    build_config(config_path, |key| std::env::var(key).ok())
}

fn build_config<F>(config_path: Option<&Path>, platform_env: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("server.max_upload_bytes", 20 * 1024 * 1024)?
        .set_default("capabilities.provider", "google")?
        .set_default("google.translate_base_url", "https://translation.googleapis.com")?
        .set_default("google.speech_base_url", "https://speech.googleapis.com")?
        .set_default("google.vision_base_url", "https://vision.googleapis.com")?
        .set_default("google.metadata_base_url", "http://metadata.google.internal")?
        .set_default("google.timeout_secs", 60)?
        .set_default("translation.model", "nmt")?
        .set_default("translation.default_source", "en")?
        .set_default("translation.default_target", "ko")?
        .set_default("speech.encoding", "LINEAR16")?
        .set_default("speech.sample_rate_hertz", 16000)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量
    // 例如: LANGBRIDGE_GOOGLE__PROJECT_ID=my-project
    builder = builder.add_source(
        Environment::with_prefix("LANGBRIDGE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    apply_platform_env(&mut app_config, platform_env)?;
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 应用托管平台注入的环境变量
///
/// - `PORT`: Cloud Run 指定的监听端口，覆盖 server.port
/// - `GOOGLE_CLOUD_PROJECT`: 仅在 google.project_id 未配置时使用
fn apply_platform_env<F>(config: &mut AppConfig, platform_env: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = platform_env("PORT").filter(|p| !p.trim().is_empty()) {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::ParseError(format!("Invalid PORT value: {}", port)))?;
    }

    let project_missing = config
        .google
        .project_id
        .as_deref()
        .map(str::is_empty)
        .unwrap_or(true);
    if project_missing {
        config.google.project_id =
            platform_env("GOOGLE_CLOUD_PROJECT").filter(|p| !p.trim().is_empty());
    }

    Ok(())
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    let base_urls = [
        ("google.translate_base_url", &config.google.translate_base_url),
        ("google.speech_base_url", &config.google.speech_base_url),
        ("google.vision_base_url", &config.google.vision_base_url),
        ("google.metadata_base_url", &config.google.metadata_base_url),
    ];
    for (key, url) in base_urls {
        if url.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} cannot be empty",
                key
            )));
        }
    }

    if config.google.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Google request timeout cannot be 0".to_string(),
        ));
    }

    if config.speech.sample_rate_hertz == 0 {
        return Err(ConfigError::ValidationError(
            "Speech sample rate cannot be 0".to_string(),
        ));
    }

    if config.translation.default_source.is_empty() || config.translation.default_target.is_empty()
    {
        return Err(ConfigError::ValidationError(
            "Default language codes cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志，不输出密钥）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Upload: {} bytes", config.server.max_upload_bytes);
    tracing::info!("Capability Provider: {}", config.capabilities.provider);
    tracing::info!(
        "Google Project: {}",
        config.google.project_id.as_deref().unwrap_or("<unset>")
    );
    tracing::info!("Google Auth: {}", config.google.auth_mode());
    tracing::info!("Google Timeout: {}s", config.google.timeout_secs);
    tracing::info!("Translation Model: {}", config.translation.model);
    tracing::info!(
        "Default Languages: {} -> {}",
        config.translation.default_source,
        config.translation.default_target
    );
    tracing::info!(
        "Speech Audio: {} @ {} Hz",
        config.speech.encoding,
        config.speech.sample_rate_hertz
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

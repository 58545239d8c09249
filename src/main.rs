//! LangbridgAI Backend - 翻译网关
//!
//! 启动流程：加载配置 → 初始化日志 → 构造能力客户端 → 启动 HTTP 服务器

use std::sync::Arc;

use langbridge::application::{SpeechRecognitionPort, TextDetectionPort, TranslationPort};
use langbridge::config::{load_config, print_config, AppConfig, Provider};
use langbridge::infrastructure::adapters::{
    build_http_client, FakeSpeechRecognizer, FakeTextDetector, FakeTranslator, GoogleAuth,
    GoogleSpeechClient, GoogleTranslateClient, GoogleVisionClient,
};
use langbridge::infrastructure::http::{
    shutdown_signal, AppState, GatewaySettings, HttpServer, ServerConfig,
};

/// 能力客户端集合
struct Capabilities {
    translator: Arc<dyn TranslationPort>,
    recognizer: Arc<dyn SpeechRecognitionPort>,
    detector: Arc<dyn TextDetectionPort>,
}

fn init_logging(config: &AppConfig) {
    let log_filter = format!(
        "{},langbridge={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_capabilities(config: &AppConfig) -> anyhow::Result<Capabilities> {
    match config.capabilities.provider {
        Provider::Google => {
            let google = &config.google;
            let http = build_http_client(google.timeout_secs)?;
            let auth = Arc::new(GoogleAuth::from_config(google, http.clone()));

            Ok(Capabilities {
                translator: Arc::new(GoogleTranslateClient::new(
                    http.clone(),
                    auth.clone(),
                    &google.translate_base_url,
                )),
                recognizer: Arc::new(GoogleSpeechClient::new(
                    http.clone(),
                    auth.clone(),
                    &google.speech_base_url,
                )),
                detector: Arc::new(GoogleVisionClient::new(http, auth, &google.vision_base_url)),
            })
        }
        Provider::Fake => {
            tracing::warn!("Using fake capability clients; no cloud calls will be made");
            Ok(Capabilities {
                translator: Arc::new(FakeTranslator::new()),
                recognizer: Arc::new(FakeSpeechRecognizer::with_transcripts(["hello world"])),
                detector: Arc::new(FakeTextDetector::with_text("Bonjour le monde")),
            })
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：平台环境变量 > 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config);

    tracing::info!("LangbridgAI Backend v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    if config.capabilities.provider == Provider::Google && config.google.project_id.is_none() {
        tracing::warn!(
            "GOOGLE_CLOUD_PROJECT environment variable not set. Some API calls might fail."
        );
    }

    let capabilities = build_capabilities(&config)?;

    let state = AppState::new(
        capabilities.translator,
        capabilities.recognizer,
        capabilities.detector,
        GatewaySettings::from_config(&config),
    );

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_body_limit(config.server.max_upload_bytes);
    let server = HttpServer::new(server_config, state);

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

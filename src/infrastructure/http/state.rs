//! Application State
//!
//! 能力客户端在启动时构造一次，通过 State 注入各处理器

use std::sync::Arc;

use crate::application::ports::DEFAULT_TRANSLATION_MODEL;
use crate::application::{
    SpeechRecognitionPort, SpeechRecognitionSettings, TextDetectionPort, TranslateImageHandler,
    TranslateSpeechHandler, TranslateTextHandler, TranslationPort,
};
use crate::config::AppConfig;
use crate::domain::LanguagePair;

/// 翻译参数
#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// 翻译模型
    pub model: String,
    /// 请求未指定语言时使用
    pub default_languages: LanguagePair,
    pub speech: SpeechRecognitionSettings,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_TRANSLATION_MODEL.to_string(),
            default_languages: LanguagePair::default(),
            speech: SpeechRecognitionSettings::default(),
        }
    }
}

impl GatewaySettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            model: config.translation.model.clone(),
            default_languages: LanguagePair::new(
                config.translation.default_source.clone(),
                config.translation.default_target.clone(),
            ),
            speech: SpeechRecognitionSettings {
                encoding: config.speech.encoding.clone(),
                sample_rate_hertz: config.speech.sample_rate_hertz,
            },
        }
    }
}

/// 应用状态
pub struct AppState {
    pub default_languages: LanguagePair,

    pub translate_text_handler: TranslateTextHandler,
    pub translate_speech_handler: TranslateSpeechHandler,
    pub translate_image_handler: TranslateImageHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        translator: Arc<dyn TranslationPort>,
        recognizer: Arc<dyn SpeechRecognitionPort>,
        detector: Arc<dyn TextDetectionPort>,
        settings: GatewaySettings,
    ) -> Self {
        let text_handler = TranslateTextHandler::with_model(translator, settings.model);

        Self {
            default_languages: settings.default_languages,

            translate_speech_handler: TranslateSpeechHandler::new(
                recognizer,
                text_handler.clone(),
                settings.speech,
            ),
            translate_image_handler: TranslateImageHandler::new(detector, text_handler.clone()),
            translate_text_handler: text_handler,
        }
    }

    /// 按默认值解析请求语言
    pub fn resolve_languages(&self, from: Option<String>, to: Option<String>) -> LanguagePair {
        LanguagePair::resolve(
            from,
            to,
            self.default_languages.source(),
            self.default_languages.target(),
        )
    }
}

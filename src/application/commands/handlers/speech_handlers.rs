//! Speech Translation Handler
//!
//! 先调用语音识别，再翻译转写文本

use std::sync::Arc;

use crate::application::commands::handlers::TranslateTextHandler;
use crate::application::commands::TranslateSpeech;
use crate::application::error::{ApplicationError, TranslationKind};
use crate::application::ports::{RecognitionRequest, SpeechRecognitionPort};
use crate::domain::{join_transcripts, SpeechTranslation};

/// 语音识别参数
///
/// 所有请求共用同一编码与采样率，上传的音频必须与之匹配
#[derive(Debug, Clone)]
pub struct SpeechRecognitionSettings {
    pub encoding: String,
    pub sample_rate_hertz: u32,
}

impl Default for SpeechRecognitionSettings {
    fn default() -> Self {
        Self {
            encoding: "LINEAR16".to_string(),
            sample_rate_hertz: 16000,
        }
    }
}

/// TranslateSpeech Handler
pub struct TranslateSpeechHandler {
    recognizer: Arc<dyn SpeechRecognitionPort>,
    text_handler: TranslateTextHandler,
    settings: SpeechRecognitionSettings,
}

impl TranslateSpeechHandler {
    pub fn new(
        recognizer: Arc<dyn SpeechRecognitionPort>,
        text_handler: TranslateTextHandler,
        settings: SpeechRecognitionSettings,
    ) -> Self {
        Self {
            recognizer,
            text_handler,
            settings,
        }
    }

    pub async fn handle(
        &self,
        command: TranslateSpeech,
    ) -> Result<SpeechTranslation, ApplicationError> {
        let audio_size = command.audio.len();
        let request = RecognitionRequest {
            audio: command.audio,
            encoding: self.settings.encoding.clone(),
            sample_rate_hertz: self.settings.sample_rate_hertz,
            language_code: command.languages.source().to_string(),
            enable_automatic_punctuation: true,
        };

        let results = self
            .recognizer
            .recognize(request)
            .await
            .map_err(|e| ApplicationError::upstream(TranslationKind::Speech, e))?;

        let transcribed_text = join_transcripts(&results);

        tracing::info!(
            audio_size = audio_size,
            results = results.len(),
            transcript_len = transcribed_text.len(),
            "Speech transcribed"
        );

        if transcribed_text.is_empty() {
            return Ok(SpeechTranslation::no_speech());
        }

        let translated_text = self
            .text_handler
            .translate(&transcribed_text, &command.languages)
            .await
            .map_err(|e| ApplicationError::upstream(TranslationKind::Speech, e))?;

        Ok(SpeechTranslation {
            transcribed_text,
            translated_text,
        })
    }
}

//! Text Translation Handler

use std::sync::Arc;

use crate::application::commands::TranslateText;
use crate::application::error::{ApplicationError, TranslationKind};
use crate::application::ports::{
    CapabilityError, TranslationPort, TranslationRequest, DEFAULT_TRANSLATION_MODEL,
};
use crate::domain::LanguagePair;

/// TranslateText Handler
///
/// 语音和图片处理器复用它完成翻译步骤
#[derive(Clone)]
pub struct TranslateTextHandler {
    translator: Arc<dyn TranslationPort>,
    model: String,
}

impl TranslateTextHandler {
    pub fn new(translator: Arc<dyn TranslationPort>) -> Self {
        Self::with_model(translator, DEFAULT_TRANSLATION_MODEL)
    }

    pub fn with_model(translator: Arc<dyn TranslationPort>, model: impl Into<String>) -> Self {
        Self {
            translator,
            model: model.into(),
        }
    }

    pub async fn handle(&self, command: TranslateText) -> Result<String, ApplicationError> {
        self.translate(&command.text, &command.languages)
            .await
            .map_err(|e| ApplicationError::upstream(TranslationKind::Text, e))
    }

    /// 翻译文本；空文本直接返回空串，不调用翻译服务
    pub(crate) async fn translate(
        &self,
        text: &str,
        languages: &LanguagePair,
    ) -> Result<String, CapabilityError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let request = TranslationRequest {
            text: text.to_string(),
            source_language: Some(languages.source().to_string()),
            target_language: languages.target().to_string(),
            model: self.model.clone(),
        };

        let translated = self.translator.translate(request).await?;

        tracing::info!(
            languages = %languages,
            text_len = text.len(),
            translated_len = translated.len(),
            "Text translated"
        );

        Ok(translated)
    }
}

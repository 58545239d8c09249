//! Image Translation Handler
//!
//! 先调用文字检测（OCR），再翻译检测到的文本

use std::sync::Arc;

use crate::application::commands::handlers::TranslateTextHandler;
use crate::application::commands::TranslateImage;
use crate::application::error::{ApplicationError, TranslationKind};
use crate::application::ports::TextDetectionPort;
use crate::domain::{first_annotation_text, ImageTranslation};

/// TranslateImage Handler
pub struct TranslateImageHandler {
    detector: Arc<dyn TextDetectionPort>,
    text_handler: TranslateTextHandler,
}

impl TranslateImageHandler {
    pub fn new(detector: Arc<dyn TextDetectionPort>, text_handler: TranslateTextHandler) -> Self {
        Self {
            detector,
            text_handler,
        }
    }

    pub async fn handle(&self, command: TranslateImage) -> Result<ImageTranslation, ApplicationError> {
        let image_size = command.image.len();

        let annotations = self
            .detector
            .detect_text(command.image)
            .await
            .map_err(|e| ApplicationError::upstream(TranslationKind::Image, e))?;

        tracing::info!(
            image_size = image_size,
            annotations = annotations.len(),
            "Image text detected"
        );

        let Some(extracted_text) = first_annotation_text(&annotations).map(str::to_string) else {
            return Ok(ImageTranslation::no_text());
        };

        let translated_text = self
            .text_handler
            .translate(&extracted_text, &command.languages)
            .await
            .map_err(|e| ApplicationError::upstream(TranslationKind::Image, e))?;

        Ok(ImageTranslation {
            extracted_text,
            translated_text,
        })
    }
}

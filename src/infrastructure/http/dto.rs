//! Data Transfer Objects
//!
//! 字段名与移动端客户端约定一致（snake_case）

use serde::{Deserialize, Serialize};

use crate::domain::{ImageTranslation, SpeechTranslation};

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

// ============================================================================
// Text
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TextTranslateRequest {
    pub text: String,
    #[serde(default)]
    pub from_lang: Option<String>,
    #[serde(default)]
    pub to_lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TextTranslateResponse {
    pub translated_text: String,
}

// ============================================================================
// Speech / Image
// ============================================================================

/// 上传接口的语言查询参数
#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    #[serde(default)]
    pub from_lang: Option<String>,
    #[serde(default)]
    pub to_lang: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SpeechTranslateResponse {
    pub transcribed_text: String,
    pub translated_text: String,
}

impl From<SpeechTranslation> for SpeechTranslateResponse {
    fn from(result: SpeechTranslation) -> Self {
        Self {
            transcribed_text: result.transcribed_text,
            translated_text: result.translated_text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImageTranslateResponse {
    pub extracted_text: String,
    pub translated_text: String,
}

impl From<ImageTranslation> for ImageTranslateResponse {
    fn from(result: ImageTranslation) -> Self {
        Self {
            extracted_text: result.extracted_text,
            translated_text: result.translated_text,
        }
    }
}

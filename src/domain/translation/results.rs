//! Translation Context - Results

/// 语音中没有识别出文字时的提示语（不是翻译结果）
pub const NO_SPEECH_DETECTED: &str = "No speech detected or transcribed.";

/// 图片中没有检测到文字时的提示语（不是翻译结果）
pub const NO_TEXT_FOUND: &str = "No text found in the image.";

/// 语音翻译结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechTranslation {
    pub transcribed_text: String,
    pub translated_text: String,
}

impl SpeechTranslation {
    /// 未识别到语音
    pub fn no_speech() -> Self {
        Self {
            transcribed_text: String::new(),
            translated_text: NO_SPEECH_DETECTED.to_string(),
        }
    }
}

/// 图片翻译结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTranslation {
    pub extracted_text: String,
    pub translated_text: String,
}

impl ImageTranslation {
    /// 未检测到文字
    pub fn no_text() -> Self {
        Self {
            extracted_text: String::new(),
            translated_text: NO_TEXT_FOUND.to_string(),
        }
    }
}

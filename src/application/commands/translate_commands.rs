//! Translate Commands

use crate::domain::LanguagePair;

/// 文本翻译命令
#[derive(Debug, Clone)]
pub struct TranslateText {
    pub text: String,
    pub languages: LanguagePair,
}

/// 语音翻译命令（先转写，再翻译）
#[derive(Debug, Clone)]
pub struct TranslateSpeech {
    pub audio: Vec<u8>,
    pub languages: LanguagePair,
}

/// 图片翻译命令（先 OCR，再翻译）
#[derive(Debug, Clone)]
pub struct TranslateImage {
    pub image: Vec<u8>,
    pub languages: LanguagePair,
}

//! Translation Context
//!
//! 职责:
//! - 语言对（源语言 / 目标语言）
//! - 识别结果（语音转写、图片文字）到待翻译文本的转换
//! - 翻译结果值对象

mod language;
mod recognition;
mod results;

pub use language::LanguagePair;
pub use recognition::{
    first_annotation_text, join_transcripts, SpeechAlternative, SpeechResult, TextAnnotation,
};
pub use results::{ImageTranslation, SpeechTranslation, NO_SPEECH_DETECTED, NO_TEXT_FOUND};

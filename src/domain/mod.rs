//! Domain Layer - 领域层
//!
//! 翻译网关没有持久化实体，领域层只包含纯规则：
//! - 语言对及默认值
//! - 语音识别结果拼接、OCR 结果选取
//! - 无内容时的提示语

pub mod translation;

pub use translation::{
    first_annotation_text, join_transcripts, ImageTranslation, LanguagePair, SpeechAlternative,
    SpeechResult, SpeechTranslation, TextAnnotation, NO_SPEECH_DETECTED, NO_TEXT_FOUND,
};

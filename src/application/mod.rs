//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 外部能力端口定义（TranslationPort、SpeechRecognitionPort、TextDetectionPort）
//! - commands: 翻译命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{
        SpeechRecognitionSettings, TranslateImageHandler, TranslateSpeechHandler,
        TranslateTextHandler,
    },
    TranslateImage, TranslateSpeech, TranslateText,
};

pub use error::{ApplicationError, TranslationKind};

pub use ports::{
    CapabilityError, RecognitionRequest, SpeechRecognitionPort, TextDetectionPort,
    TranslationPort, TranslationRequest,
};

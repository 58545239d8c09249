//! Application Ports - 出站端口定义
//!
//! 定义应用层与外部能力提供方（翻译、语音识别、文字检测）之间的抽象接口，
//! 具体实现在 infrastructure/adapters 层

mod capability_error;
mod speech_recognition;
mod text_detection;
mod translation;

pub use capability_error::CapabilityError;
pub use speech_recognition::{RecognitionRequest, SpeechRecognitionPort};
pub use text_detection::TextDetectionPort;
pub use translation::{TranslationPort, TranslationRequest, DEFAULT_TRANSLATION_MODEL};

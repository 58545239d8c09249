//! Fake Adapters - 内存实现的能力客户端
//!
//! 不访问网络，返回预设结果并记录调用，用于测试和无云凭证的本地开发

mod fake_speech_recognizer;
mod fake_text_detector;
mod fake_translator;

pub use fake_speech_recognizer::FakeSpeechRecognizer;
pub use fake_text_detector::FakeTextDetector;
pub use fake_translator::FakeTranslator;

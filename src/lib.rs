//! LangbridgAI - 翻译网关
//!
//! 三个 REST 接口（文本、语音、图片翻译），每个请求转发给云端能力提供方并整理为 JSON。
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - 语言对、识别结果到文本的规则、提示语
//!
//! 应用层 (application/):
//! - Ports: TranslationPort, SpeechRecognitionPort, TextDetectionPort
//! - Commands: 文本 / 语音 / 图片翻译处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: Google Cloud REST 客户端、内存 Fake 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

//! Translation Port - 文本翻译能力抽象

use async_trait::async_trait;

use super::CapabilityError;

/// 默认翻译模型（神经机器翻译）
pub const DEFAULT_TRANSLATION_MODEL: &str = "nmt";

/// 翻译请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// 待翻译文本
    pub text: String,
    /// 源语言，None 表示由服务自动检测
    pub source_language: Option<String>,
    /// 目标语言
    pub target_language: String,
    /// 翻译模型
    pub model: String,
}

/// Translation Port
#[async_trait]
pub trait TranslationPort: Send + Sync {
    /// 翻译文本，返回译文
    async fn translate(&self, request: TranslationRequest) -> Result<String, CapabilityError>;
}

//! 应用层错误定义
//!
//! 翻译网关只有一种错误：上游能力提供方失败

use thiserror::Error;

use crate::application::ports::CapabilityError;

/// 翻译操作种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationKind {
    Text,
    Speech,
    Image,
}

impl TranslationKind {
    pub fn label(&self) -> &'static str {
        match self {
            TranslationKind::Text => "Text",
            TranslationKind::Speech => "Speech",
            TranslationKind::Image => "Image",
        }
    }

    /// 附加在错误消息后的排查提示
    fn hint(&self) -> &'static str {
        match self {
            TranslationKind::Speech => ". Ensure audio encoding and sample rate are correct.",
            TranslationKind::Text | TranslationKind::Image => "",
        }
    }
}

impl std::fmt::Display for TranslationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 上游失败：网络、认证、参数、配额等一律归为此类，不重试
    #[error("{} translation failed: {}{}", .operation.label(), .source, .operation.hint())]
    UpstreamFailure {
        operation: TranslationKind,
        source: CapabilityError,
    },
}

impl ApplicationError {
    /// 创建上游失败错误
    pub fn upstream(operation: TranslationKind, source: CapabilityError) -> Self {
        Self::UpstreamFailure { operation, source }
    }

    pub fn operation(&self) -> TranslationKind {
        match self {
            Self::UpstreamFailure { operation, .. } => *operation,
        }
    }
}

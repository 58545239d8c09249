//! Translation Context - Language Pair

/// 语言对
///
/// 语言代码原样透传给上游服务，无效代码由上游拒绝
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    source: String,
    target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// 按优先级解析：显式值 > 默认值，空字符串视为未提供
    pub fn resolve(
        source: Option<String>,
        target: Option<String>,
        default_source: &str,
        default_target: &str,
    ) -> Self {
        let pick = |value: Option<String>, default: &str| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            source: pick(source, default_source),
            target: pick(target, default_target),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new("en", "ko")
    }
}

impl std::fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

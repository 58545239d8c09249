//! Fake Translator

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{CapabilityError, TranslationPort, TranslationRequest};

/// Fake Translator
///
/// 默认返回 `"[{target}] {text}"`，可预设固定译文或失败
#[derive(Default)]
pub struct FakeTranslator {
    reply: Option<String>,
    failure: Option<CapabilityError>,
    calls: Mutex<Vec<TranslationRequest>>,
}

impl FakeTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 始终返回固定译文
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            ..Self::default()
        }
    }

    /// 始终失败
    pub fn failing(error: CapabilityError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// 已收到的请求
    pub fn calls(&self) -> Vec<TranslationRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

#[async_trait]
impl TranslationPort for FakeTranslator {
    async fn translate(&self, request: TranslationRequest) -> Result<String, CapabilityError> {
        tracing::debug!(
            text_len = request.text.len(),
            target = %request.target_language,
            "FakeTranslator: translating"
        );

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        Ok(match &self.reply {
            Some(reply) => reply.clone(),
            None => format!("[{}] {}", request.target_language, request.text),
        })
    }
}

//! Fake Text Detector

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{CapabilityError, TextDetectionPort};
use crate::domain::TextAnnotation;

/// Fake Text Detector
///
/// 对任意图片返回预设注释，第一条应为聚合文本
#[derive(Default)]
pub struct FakeTextDetector {
    annotations: Vec<TextAnnotation>,
    failure: Option<CapabilityError>,
    /// 每次调用收到的图片大小
    calls: Mutex<Vec<usize>>,
}

impl FakeTextDetector {
    pub fn new(annotations: Vec<TextAnnotation>) -> Self {
        Self {
            annotations,
            ..Self::default()
        }
    }

    /// 聚合文本加逐词注释
    pub fn with_text(text: &str) -> Self {
        let mut annotations = vec![TextAnnotation::new(text)];
        annotations.extend(text.split_whitespace().map(TextAnnotation::new));
        Self::new(annotations)
    }

    /// 图片中没有文字
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn failing(error: CapabilityError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<usize> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

#[async_trait]
impl TextDetectionPort for FakeTextDetector {
    async fn detect_text(&self, image: Vec<u8>) -> Result<Vec<TextAnnotation>, CapabilityError> {
        tracing::debug!(image_size = image.len(), "FakeTextDetector: returning scripted annotations");

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(image.len());
        }

        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.annotations.clone()),
        }
    }
}

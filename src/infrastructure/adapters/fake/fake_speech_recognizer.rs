//! Fake Speech Recognizer

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{CapabilityError, RecognitionRequest, SpeechRecognitionPort};
use crate::domain::SpeechResult;

/// Fake Speech Recognizer
///
/// 对任意音频返回预设的识别结果
#[derive(Default)]
pub struct FakeSpeechRecognizer {
    results: Vec<SpeechResult>,
    failure: Option<CapabilityError>,
    calls: Mutex<Vec<RecognitionRequest>>,
}

impl FakeSpeechRecognizer {
    pub fn new(results: Vec<SpeechResult>) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }

    /// 每段结果只有一个候选
    pub fn with_transcripts<I, S>(transcripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(transcripts.into_iter().map(SpeechResult::single).collect())
    }

    /// 不返回任何结果（静音）
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn failing(error: CapabilityError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecognitionRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

#[async_trait]
impl SpeechRecognitionPort for FakeSpeechRecognizer {
    async fn recognize(
        &self,
        request: RecognitionRequest,
    ) -> Result<Vec<SpeechResult>, CapabilityError> {
        tracing::debug!(
            audio_size = request.audio.len(),
            language = %request.language_code,
            "FakeSpeechRecognizer: returning scripted results"
        );

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request);
        }

        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.results.clone()),
        }
    }
}

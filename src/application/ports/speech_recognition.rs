//! Speech Recognition Port - 语音识别能力抽象

use async_trait::async_trait;

use super::CapabilityError;
use crate::domain::SpeechResult;

/// 语音识别请求
///
/// 编码和采样率由调用方固定给出，不做格式探测
#[derive(Debug, Clone)]
pub struct RecognitionRequest {
    /// 原始音频字节
    pub audio: Vec<u8>,
    /// 音频编码，如 LINEAR16
    pub encoding: String,
    /// 采样率（Hz）
    pub sample_rate_hertz: u32,
    /// 语音的语言代码
    pub language_code: String,
    /// 是否自动添加标点
    pub enable_automatic_punctuation: bool,
}

/// Speech Recognition Port
#[async_trait]
pub trait SpeechRecognitionPort: Send + Sync {
    /// 识别音频，按音频顺序返回各段结果
    async fn recognize(
        &self,
        request: RecognitionRequest,
    ) -> Result<Vec<SpeechResult>, CapabilityError>;
}

//! Text Detection Port - 图片文字检测（OCR）能力抽象

use async_trait::async_trait;

use super::CapabilityError;
use crate::domain::TextAnnotation;

/// Text Detection Port
#[async_trait]
pub trait TextDetectionPort: Send + Sync {
    /// 检测图片中的文字
    ///
    /// 返回的第一条注释是整张图片的聚合文本，其余为逐词/逐区域注释
    async fn detect_text(&self, image: Vec<u8>) -> Result<Vec<TextAnnotation>, CapabilityError>;
}

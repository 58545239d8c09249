//! Translation Context - Recognition Results
//!
//! 语音识别与文字检测的结果形状，以及从中取出待翻译文本的规则

/// 单个转写候选
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechAlternative {
    pub transcript: String,
    pub confidence: Option<f32>,
}

impl SpeechAlternative {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            confidence: None,
        }
    }
}

/// 一段连续音频的识别结果，候选按可信度降序排列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeechResult {
    pub alternatives: Vec<SpeechAlternative>,
}

impl SpeechResult {
    /// 单候选结果
    pub fn single(transcript: impl Into<String>) -> Self {
        Self {
            alternatives: vec![SpeechAlternative::new(transcript)],
        }
    }

    /// 首选候选
    pub fn top(&self) -> Option<&SpeechAlternative> {
        self.alternatives.first()
    }
}

/// 文字检测注释
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnnotation {
    pub description: String,
    pub locale: Option<String>,
}

impl TextAnnotation {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            locale: None,
        }
    }
}

/// 拼接每段结果的首选候选，单空格分隔并去除首尾空白
///
/// 没有候选的结果被跳过
pub fn join_transcripts(results: &[SpeechResult]) -> String {
    results
        .iter()
        .filter_map(SpeechResult::top)
        .map(|alt| alt.transcript.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// 取图片的完整文字
///
/// 文字检测服务的约定：第一条注释是整张图片的聚合文本，其余是逐词/逐区域的注释。
/// 没有注释时返回 None。
pub fn first_annotation_text(annotations: &[TextAnnotation]) -> Option<&str> {
    annotations.first().map(|a| a.description.as_str())
}

//! Multipart 上传读取
//!
//! 语音和图片接口共用：一个文件字段，加上可选的 from_lang / to_lang 文本字段

use axum::extract::Multipart;

use crate::infrastructure::http::dto::LanguageQuery;
use crate::infrastructure::http::error::ApiError;

/// 解析后的上传内容
#[derive(Debug)]
pub(super) struct Upload {
    pub data: Vec<u8>,
    pub file_name: Option<String>,
    pub from_lang: Option<String>,
    pub to_lang: Option<String>,
}

impl Upload {
    /// 表单字段优先于查询参数，空白表单字段视为未提供
    pub fn languages(&self, query: LanguageQuery) -> (Option<String>, Option<String>) {
        (
            non_blank(&self.from_lang).or(query.from_lang),
            non_blank(&self.to_lang).or(query.to_lang),
        )
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

/// 读取 multipart 表单，`file_field` 为必填文件字段名
pub(super) async fn read_upload(
    mut multipart: Multipart,
    file_field: &str,
) -> Result<Upload, ApiError> {
    let mut data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut from_lang: Option<String> = None;
    let mut to_lang: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::from_multipart("Failed to read multipart field", e))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "from_lang" => {
                from_lang = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::from_multipart("Failed to read from_lang", e))?,
                );
            }
            "to_lang" => {
                to_lang = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::from_multipart("Failed to read to_lang", e))?,
                );
            }
            name if name == file_field => {
                file_name = field.file_name().map(|s| s.to_string());
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| {
                            ApiError::from_multipart(&format!("Failed to read {}", file_field), e)
                        })?
                        .to_vec(),
                );
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| {
        ApiError::UnprocessableEntity(format!("Field required: {}", file_field))
    })?;

    Ok(Upload {
        data,
        file_name,
        from_lang,
        to_lang,
    })
}

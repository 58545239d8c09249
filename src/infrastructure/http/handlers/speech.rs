//! Speech Translation Handler

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use std::sync::Arc;

use super::upload::read_upload;
use crate::application::TranslateSpeech;
use crate::infrastructure::http::dto::{LanguageQuery, SpeechTranslateResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /translate/speech
///
/// 音频必须符合配置的编码和采样率（默认 LINEAR16 / 16000 Hz）
pub async fn translate_speech(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LanguageQuery>,
    multipart: Multipart,
) -> Result<Json<SpeechTranslateResponse>, ApiError> {
    let upload = read_upload(multipart, "audio_file").await?;
    let (from_lang, to_lang) = upload.languages(query);
    let languages = state.resolve_languages(from_lang, to_lang);

    tracing::info!(
        file_name = ?upload.file_name,
        audio_size = upload.data.len(),
        languages = %languages,
        "Speech translation requested"
    );

    let command = TranslateSpeech {
        audio: upload.data,
        languages,
    };

    let result = state.translate_speech_handler.handle(command).await?;

    Ok(Json(result.into()))
}

//! Text Translation Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::TranslateText;
use crate::infrastructure::http::dto::{TextTranslateRequest, TextTranslateResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /translate/text
pub async fn translate_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextTranslateRequest>,
) -> Result<Json<TextTranslateResponse>, ApiError> {
    let command = TranslateText {
        text: req.text,
        languages: state.resolve_languages(req.from_lang, req.to_lang),
    };

    let translated_text = state.translate_text_handler.handle(command).await?;

    Ok(Json(TextTranslateResponse { translated_text }))
}

//! Image Translation Handler

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use std::sync::Arc;

use super::upload::read_upload;
use crate::application::TranslateImage;
use crate::infrastructure::http::dto::{ImageTranslateResponse, LanguageQuery};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /translate/image
pub async fn translate_image(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LanguageQuery>,
    multipart: Multipart,
) -> Result<Json<ImageTranslateResponse>, ApiError> {
    let upload = read_upload(multipart, "image_file").await?;
    let (from_lang, to_lang) = upload.languages(query);
    let languages = state.resolve_languages(from_lang, to_lang);

    tracing::info!(
        file_name = ?upload.file_name,
        image_size = upload.data.len(),
        languages = %languages,
        "Image translation requested"
    );

    let command = TranslateImage {
        image: upload.data,
        languages,
    };

    let result = state.translate_image_handler.handle(command).await?;

    Ok(Json(result.into()))
}

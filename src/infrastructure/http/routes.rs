//! HTTP Routes
//!
//! API Endpoints:
//! - /                  GET   健康检查
//! - /translate/text    POST  文本翻译（JSON）
//! - /translate/speech  POST  语音转写后翻译（multipart: audio_file）
//! - /translate/image   POST  图片 OCR 后翻译（multipart: image_file）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::health_check))
        .nest("/translate", translate_routes())
}

/// Translate 路由
fn translate_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/text", post(handlers::translate_text))
        .route("/speech", post(handlers::translate_speech))
        .route("/image", post(handlers::translate_image))
}

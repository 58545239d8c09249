//! Health Check Handler
//!
//! 不检查下游能力提供方，始终返回 200

use axum::Json;

use crate::infrastructure::http::dto::HealthResponse;

pub const HEALTH_MESSAGE: &str = "LangbridgAI Backend is running!";

/// GET /
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: HEALTH_MESSAGE,
    })
}

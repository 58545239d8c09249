//! HTTP Middleware
//!
//! 请求 ID 与 HTTP 状态码错误日志中间件

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// 响应头中的请求 ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求 ID + 错误日志中间件
///
/// 为每个请求生成 ID 并写入日志 span 和响应头；状态码为 4xx 或 5xx 时记录日志
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = Uuid::new_v4();

    let span = tracing::info_span!("request", request_id = %request_id);
    let mut response = next.run(request).instrument(span).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    async fn ok_handler() -> &'static str {
        "OK"
    }

    async fn unprocessable_handler() -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    async fn error_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(ok_handler))
            .route("/unprocessable", get(unprocessable_handler))
            .route("/error", get(error_handler))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    async fn call(uri: &str) -> Response {
        let request = HttpRequest::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_test_router().oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_ok_response_has_request_id() {
        let response = call("/ok").await;
        assert_eq!(response.status(), StatusCode::OK);

        let request_id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert!(Uuid::parse_str(request_id).is_ok());
    }

    #[tokio::test]
    async fn test_client_error_passes_through() {
        let response = call("/unprocessable").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_server_error_passes_through() {
        let response = call("/error").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_request_ids_are_unique() {
        let first = call("/ok").await;
        let second = call("/ok").await;
        assert_ne!(
            first.headers()[REQUEST_ID_HEADER],
            second.headers()[REQUEST_ID_HEADER]
        );
    }
}

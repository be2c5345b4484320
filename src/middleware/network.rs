use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{Json, Response},
};

use crate::config;
use crate::error::ApiError;

const INTERNAL_TOKEN_HEADER: &str = "x-internal-token";

/// Guard for service-to-service routes. Requests must carry the shared
/// internal token; when no token is configured the route is closed.
pub async fn internal_network_middleware(
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    check_internal_token(&headers, &config::config().security.internal_token).map_err(|err| {
        (
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::FORBIDDEN),
            Json(err.to_json()),
        )
    })?;

    Ok(next.run(request).await)
}

fn check_internal_token(headers: &HeaderMap, expected: &str) -> Result<(), ApiError> {
    if expected.is_empty() {
        tracing::warn!("Internal route hit but INTERNAL_API_TOKEN is not configured");
        return Err(ApiError::forbidden("Internal network only"));
    }

    match headers.get(INTERNAL_TOKEN_HEADER).and_then(|v| v.to_str().ok()) {
        Some(token) if token == expected => Ok(()),
        _ => Err(ApiError::forbidden("Internal network only")),
    }
}

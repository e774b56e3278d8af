use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::config::AppConfig;
use crate::middleware::error_handling::{AppError, Result};

/// Shared-token gate for the quotation endpoint.
///
/// The mapping runs with elevated privilege against the backend, so callers
/// must prove they are the trusted CRM integration. When no bridge key is
/// configured the gate is open (deployment behind a trusted gateway).
pub async fn auth_middleware(
    State(config): State<AppConfig>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let Some(expected) = config.bridge_api_key.as_deref() else {
        return Ok(next.run(request).await);
    };

    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match provided {
        Some(token) if token == expected => Ok(next.run(request).await),
        _ => Err(AppError::Unauthorized),
    }
}

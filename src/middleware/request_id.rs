// ============================================================================
// Request ID Middleware
// ============================================================================
//
// The bridge sits between a CRM and an ERP; when a quotation goes missing the
// first question is always "which request was that". Every request gets an
// X-Request-ID (client-supplied if valid, generated otherwise) that is logged
// on the way in and out and echoed in the response headers.
//
// ============================================================================

use axum::{extract::Request, http::header, middleware::Next, response::Response};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    request.extensions_mut().insert(request_id);

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        "→ Incoming request"
    );

    let mut response = next.run(request).await;

    if let Ok(value) = request_id.to_string().parse() {
        response
            .headers_mut()
            .insert(header::HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    tracing::info!(
        request_id = %request_id,
        status = %response.status(),
        "← Outgoing response"
    );

    response
}

// ============================================================================
// Error Handling - HTTP Error Boundary
// ============================================================================
//
// All failure paths of the bridge converge here. Mapper and backend errors
// are converted to `AppError` at the handler boundary, logged server-side
// where they carry internal detail, and rendered as a JSON body with a
// human-readable message. Every failure is terminal for the call; there is
// no retry path anywhere in the service.
//
// ============================================================================

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::services::quotation_service::QuotationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<QuotationError> for AppError {
    fn from(err: QuotationError) -> Self {
        match err {
            QuotationError::CompanyNotFound(_) => AppError::NotFound(err.to_string()),
            QuotationError::MissingLinkage => AppError::BadRequest(err.to_string()),
            QuotationError::Backend(ref backend_err) => {
                // Full detail stays server-side; the caller gets the message text.
                tracing::error!(error = ?backend_err, "Quotation creation failed");
                AppError::Backend(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation failed".to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Backend(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Internal(err) => {
                tracing::error!("Internal error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::erp::BackendError;

    #[test]
    fn test_company_not_found_maps_to_404() {
        let err: AppError = QuotationError::CompanyNotFound("NOPE".to_string()).into();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg.contains("NOPE")));
    }

    #[test]
    fn test_missing_linkage_maps_to_bad_request() {
        let err: AppError = QuotationError::MissingLinkage.into();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_backend_failure_keeps_original_error_text() {
        let backend = BackendError::NotFound("Deal DEAL-404 not found".to_string());
        let err: AppError = QuotationError::Backend(backend).into();

        match err {
            AppError::Backend(msg) => {
                assert!(msg.starts_with("failed to create quotation:"));
                assert!(msg.contains("DEAL-404"));
            }
            other => panic!("expected Backend error, got {other:?}"),
        }
    }
}

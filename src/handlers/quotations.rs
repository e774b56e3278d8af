use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::config::AppConfig;
use crate::middleware::error_handling::{AppError, Result};
use crate::models::quotation::{CreateQuotationRequest, QuotationCreated};
use crate::services::erp::{BackendClient, Privilege};
use crate::services::QuotationService;

/// Create an ERP quotation from a CRM deal, pinned to the given company.
///
/// The one remotely callable operation of the bridge. The insert runs with
/// elevated privilege on the backend; access to this endpoint is controlled
/// by the bridge's own auth gate instead.
pub async fn create_from_deal(
    State(config): State<AppConfig>,
    Json(request): Json<CreateQuotationRequest>,
) -> Result<(StatusCode, Json<QuotationCreated>)> {
    request.validate().map_err(AppError::Validation)?;

    let backend = BackendClient::new(config.backend.clone())
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
    let service = QuotationService::new(backend);

    let quotation_name = service
        .create_for_company(&request.deal_name, &request.company, Privilege::Elevated)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(QuotationCreated { quotation_name }),
    ))
}

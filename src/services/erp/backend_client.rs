// Document Backend REST Client
// Typed client for the CRM/ERP document backend that owns Deal, Company and
// Quotation records. The backend stays a black box: this client only drives
// its CRUD surface (existence check, load, privileged insert, commit).

use reqwest::{header, Client, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::config::BackendConfig;
use crate::models::deal::Deal;
use crate::models::quotation::NewQuotation;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("backend API error ({0}): {1}")]
    ApiError(StatusCode, String),

    #[error("authentication failed: {0}")]
    AuthError(String),

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("record not found: {0}")]
    NotFound(String),

    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, BackendError>;

// ============================================================================
// Document Types
// ============================================================================

pub mod doctype {
    pub const COMPANY: &str = "Company";
    pub const DEAL: &str = "Deal";
    pub const QUOTATION: &str = "Quotation";
}

/// Permission context for write operations. The bridge runs quotation inserts
/// elevated because the calling CRM user typically has no create permission
/// on the target company's documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    Standard,
    Elevated,
}

// ============================================================================
// Client
// ============================================================================

/// An authenticated session against the document backend. Constructed per
/// request and passed explicitly into the mapping service; there is no
/// ambient connection state.
pub struct BackendClient {
    base_url: String,
    auth_header: String,
    http_client: Client,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(BackendError::ConfigError("base_url is required".to_string()));
        }
        if config.api_key.is_empty() {
            return Err(BackendError::ConfigError("api_key is required".to_string()));
        }
        if config.api_secret.is_empty() {
            return Err(BackendError::ConfigError("api_secret is required".to_string()));
        }

        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(BackendError::NetworkError)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header: format!("token {}:{}", config.api_key, config.api_secret),
            http_client,
        })
    }

    // ========================================================================
    // Record Operations
    // ========================================================================

    /// Check whether a record exists. A record the session cannot see at all
    /// (403) is reported as absent, matching the backend's own semantics for
    /// cross-company visibility.
    pub async fn exists(&self, doctype: &str, name: &str) -> Result<bool> {
        let url = format!("{}/api/resource/{}/{}", self.base_url, doctype, name);
        let response = self.get(&url).await?;

        match response.status() {
            StatusCode::NOT_FOUND | StatusCode::FORBIDDEN => Ok(false),
            StatusCode::UNAUTHORIZED => {
                Err(BackendError::AuthError("invalid API credentials".to_string()))
            }
            status if status.is_success() => Ok(true),
            status => {
                let error_text = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
                Err(BackendError::ApiError(status, error_text))
            }
        }
    }

    /// Load a deal by identifier. Absence is an error here, unlike `exists`:
    /// the mapper has already decided this deal must be present.
    pub async fn get_deal(&self, name: &str) -> Result<Deal> {
        let url = format!("{}/api/resource/{}/{}", self.base_url, doctype::DEAL, name);
        let response = self.get(&url).await?;
        self.parse_response(response).await
    }

    /// Insert a quotation document. `Privilege::Elevated` asks the backend to
    /// bypass its normal permission checks for this write.
    pub async fn insert_quotation(
        &self,
        quotation: &NewQuotation,
        privilege: Privilege,
    ) -> Result<String> {
        let url = format!("{}/api/resource/{}", self.base_url, doctype::QUOTATION);

        let mut request = self
            .http_client
            .post(&url)
            .header(header::AUTHORIZATION, &self.auth_header)
            .json(quotation);

        if privilege == Privilege::Elevated {
            request = request.query(&[("ignore_permissions", "1")]);
        }

        let response = request.send().await?;

        #[derive(Deserialize)]
        struct InsertResponse {
            name: String,
        }

        let created: InsertResponse = self.parse_response(response).await?;
        Ok(created.name)
    }

    /// Commit the backend transaction for this session. Inserted documents
    /// are not visible to other sessions until committed.
    pub async fn commit(&self) -> Result<()> {
        let url = format!("{}/api/method/commit", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .header(header::AUTHORIZATION, &self.auth_header)
            .send()
            .await?;

        self.check_success(response).await
    }

    /// Test connectivity to the backend.
    pub async fn ping(&self) -> Result<bool> {
        let url = format!("{}/api/method/ping", self.base_url);
        let response = self.get(&url).await?;
        Ok(response.status().is_success())
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    async fn get(&self, url: &str) -> Result<Response> {
        let response = self
            .http_client
            .get(url)
            .header(header::AUTHORIZATION, &self.auth_header)
            .send()
            .await?;
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
            return match status {
                StatusCode::NOT_FOUND => Err(BackendError::NotFound(error_text)),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Err(BackendError::AuthError(error_text))
                }
                _ => Err(BackendError::ApiError(status, error_text)),
            };
        }

        response.json().await.map_err(BackendError::NetworkError)
    }

    async fn check_success(&self, response: Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
            return match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Err(BackendError::AuthError(error_text))
                }
                _ => Err(BackendError::ApiError(status, error_text)),
            };
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

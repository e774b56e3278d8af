use std::env;

use anyhow::Result;

/// Connection settings for the document backend (the CRM/ERP system that
/// owns Deal, Company and Quotation records).
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_secret: String,
    pub timeout_secs: u64,
}

impl BackendConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: env::var("ERP_BASE_URL")?,
            api_key: env::var("ERP_API_KEY")?,
            api_secret: env::var("ERP_API_SECRET")?,
            timeout_secs: env::var("ERP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub server_host: String,
    pub server_port: u16,
    /// Shared token callers must present as `Authorization: Bearer <key>`.
    /// `None` disables the gate.
    pub bridge_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            backend: BackendConfig::from_env()?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            bridge_api_key: env::var("BRIDGE_API_KEY").ok().filter(|k| !k.is_empty()),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

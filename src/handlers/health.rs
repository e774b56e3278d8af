use axum::{extract::State, response::IntoResponse, Json};

use crate::config::AppConfig;
use crate::services::erp::BackendClient;

/// Liveness plus a reachability probe of the document backend.
pub async fn health_check(State(config): State<AppConfig>) -> impl IntoResponse {
    let backend_reachable = match BackendClient::new(config.backend.clone()) {
        Ok(client) => client.ping().await.unwrap_or(false),
        Err(_) => false,
    };

    Json(serde_json::json!({
        "status": if backend_reachable { "ok" } else { "degraded" },
        "service": "quotation_bridge",
        "backend_reachable": backend_reachable,
        "timestamp": chrono::Utc::now(),
    }))
}

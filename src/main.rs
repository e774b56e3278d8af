use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quotation_bridge::config::AppConfig;
use quotation_bridge::create_app;
use quotation_bridge::services::erp::BackendClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Default to INFO level; override with RUST_LOG for debugging.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "quotation_bridge=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.bridge_api_key.is_none() {
        tracing::warn!("⚠️  BRIDGE_API_KEY not set - the quotation endpoint accepts unauthenticated callers");
    }

    // Probe the document backend once at startup so a misconfigured deployment
    // shows up in the logs immediately rather than on the first mapped deal.
    match BackendClient::new(config.backend.clone()) {
        Ok(client) => match client.ping().await {
            Ok(true) => tracing::info!("✅ Document backend reachable at {}", config.backend.base_url),
            Ok(false) => tracing::warn!(
                "⚠️  Document backend at {} responded but is not healthy",
                config.backend.base_url
            ),
            Err(e) => tracing::warn!(
                "⚠️  Document backend at {} unreachable: {}",
                config.backend.base_url,
                e
            ),
        },
        Err(e) => tracing::error!("❌ Invalid document backend configuration: {}", e),
    }

    let addr = config.server_address();
    let app = create_app(config);

    tracing::info!("Starting quotation bridge on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

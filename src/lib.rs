pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

use config::AppConfig;

pub fn create_app(config: AppConfig) -> Router {
    Router::new()
        .nest(
            "/api/quotations",
            Router::new()
                .route("/from-deal", post(handlers::quotations::create_from_deal))
                .layer(axum_middleware::from_fn_with_state(
                    config.clone(),
                    middleware::auth_middleware,
                )),
        )
        .route("/api/health", get(handlers::health::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id_middleware)),
        )
        .with_state(config)
}

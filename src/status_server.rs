use std::sync::Arc;

use anyhow::Result;
use axum::{extract::State, routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::domain::config::StatusConfig;
use crate::domain::models::InstanceStatus;
use crate::features::instance::InstanceConfig;

pub type SharedConfig = Arc<dyn InstanceConfig>;

pub fn router(config: SharedConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any);

    Router::new()
        .route("/status", get(get_status))
        .route("/health", get(health_check))
        .layer(cors)
        .with_state(config)
}

pub async fn run(config: SharedConfig) -> Result<()> {
    let addr = format!("{}:{}", StatusConfig::BIND_HOST, StatusConfig::STATUS_PORT);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("Status server listening on http://{}", addr);

    axum::serve(listener, router(config)).await?;

    Ok(())
}

async fn get_status(State(config): State<SharedConfig>) -> Json<InstanceStatus> {
    Json(config.status())
}

async fn health_check() -> &'static str {
    "ok"
}

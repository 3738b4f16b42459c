// src/web/handlers/system_handlers.rs
use crate::config::AppConfig;
use crate::web::types::HealthResponse;

use rocket::fs::NamedFile;
use rocket::serde::json::Json;
use std::path::PathBuf;
use tracing::info;

pub async fn health_handler() -> Json<HealthResponse> {
    info!("Health check");
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// The single-page UI. The page only renders whatever JSON the analysis
/// endpoint returns.
pub async fn index_handler(config: &AppConfig) -> Option<NamedFile> {
    NamedFile::open(config.server.static_dir.join("index.html"))
        .await
        .ok()
}

pub async fn static_file_handler(config: &AppConfig, file: PathBuf) -> Option<NamedFile> {
    NamedFile::open(config.server.static_dir.join(file)).await.ok()
}

// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use crate::config::AppConfig;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::fs::NamedFile;
use rocket::http::{Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use std::path::PathBuf;
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/")]
pub async fn index(config: &State<AppConfig>) -> Option<NamedFile> {
    handlers::index_handler(config.inner()).await
}

#[get("/static/<file..>")]
pub async fn static_files(file: PathBuf, config: &State<AppConfig>) -> Option<NamedFile> {
    handlers::static_file_handler(config.inner(), file).await
}

#[post("/fetch-and-analyze", data = "<request>")]
pub async fn fetch_and_analyze(
    request: Json<AnalyzeRequest>,
    config: &State<AppConfig>,
) -> Result<Json<AnalyzeResponse>, Custom<Json<ErrorResponse>>> {
    handlers::fetch_and_analyze_handler(request, config.inner()).await
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers keep the reply envelope uniform even when Rocket rejects
// the request before a handler runs.
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request format".to_string()))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Resource not found".to_string()))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request format".to_string()))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error".to_string()))
}

/// Assemble the Rocket instance from an explicit configuration value. Tests
/// drive the same instance through Rocket's local client.
pub fn build_rocket(config: AppConfig) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.server.host.clone()))
        .merge(("port", config.server.port));

    rocket::custom(figment)
        .attach(Cors)
        .manage(config)
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount(
            "/",
            routes![index, static_files, fetch_and_analyze, health, options],
        )
}

// Main server start function
pub async fn start_web_server(config: AppConfig) -> Result<()> {
    info!(
        "Starting business match analysis server on {}:{}",
        config.server.host, config.server.port
    );

    let _rocket = build_rocket(config).launch().await?;

    Ok(())
}

// src/web/handlers/analyze_handlers.rs
use crate::company_analysis::{
    build_agent, AnalysisError, AnalysisReport, CompanyProfile, MatchAnalyzer, ProfileExtractor,
};
use crate::config::AppConfig;
use crate::web::types::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};

use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use tracing::{error, info};

/// Validate the two URLs, research both companies, compare them, reply.
/// All-or-nothing: any failure after validation maps to one 500 reply with
/// the failure text, never a partial result.
pub async fn fetch_and_analyze_handler(
    request: Json<AnalyzeRequest>,
    config: &AppConfig,
) -> Result<Json<AnalyzeResponse>, Custom<Json<ErrorResponse>>> {
    let (user_url, target_url) = match validate_urls(&request) {
        Some(urls) => urls,
        None => {
            info!("Rejecting request with missing or empty URLs");
            return Err(Custom(
                Status::BadRequest,
                Json(ErrorResponse::new("Missing URLs".to_string())),
            ));
        }
    };

    match run_pipeline(config, user_url, target_url).await {
        Ok((user_profile, target_profile, analysis_report)) => {
            info!("Analysis complete.");
            Ok(Json(AnalyzeResponse::success(
                user_profile,
                target_profile,
                analysis_report,
            )))
        }
        Err(e) => {
            error!("Analysis request failed ({}): {}", e.kind(), e);
            Err(Custom(
                Status::InternalServerError,
                Json(ErrorResponse::new(e.to_string())),
            ))
        }
    }
}

/// A key that is absent, empty, or whitespace counts as missing.
fn validate_urls(request: &AnalyzeRequest) -> Option<(&str, &str)> {
    let user_url = request
        .user_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())?;
    let target_url = request
        .target_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())?;

    Some((user_url, target_url))
}

async fn run_pipeline(
    config: &AppConfig,
    user_url: &str,
    target_url: &str,
) -> Result<(CompanyProfile, CompanyProfile, AnalysisReport), AnalysisError> {
    let (client, tools) = build_agent(config)?;

    info!("Researching URLs: {} and {}", user_url, target_url);
    let extractor = ProfileExtractor::new(&client, &tools);
    let user_profile = extractor.extract(user_url).await?;
    let target_profile = extractor.extract(target_url).await?;
    info!("Research complete. Profiles generated.");

    info!("Performing business match analysis...");
    let analyzer = MatchAnalyzer::new(&client);
    let analysis_report = analyzer.analyze(&user_profile, &target_profile).await?;

    Ok((user_profile, target_profile, analysis_report))
}

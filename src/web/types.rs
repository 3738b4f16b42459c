// src/web/types.rs
use crate::company_analysis::{AnalysisReport, CompanyProfile};
use rocket::serde::{Deserialize, Serialize};

/// Both URLs are required; they stay optional here so a missing key reaches
/// the handler's own validation instead of failing JSON parsing.
#[derive(Debug, Clone, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct AnalyzeRequest {
    pub user_url: Option<String>,
    pub target_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct AnalyzeResponse {
    pub status: String,
    pub user_profile: CompanyProfile,
    pub target_profile: CompanyProfile,
    pub analysis_report: AnalysisReport,
}

impl AnalyzeResponse {
    pub fn success(
        user_profile: CompanyProfile,
        target_profile: CompanyProfile,
        analysis_report: AnalysisReport,
    ) -> Self {
        Self {
            status: "success".to_string(),
            user_profile,
            target_profile,
            analysis_report,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_request_tolerates_missing_keys() {
        let request: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.user_url.is_none());
        assert!(request.target_url.is_none());
    }

    #[test]
    fn error_response_carries_the_error_status() {
        let response = ErrorResponse::new("Missing URLs".to_string());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "Missing URLs");
    }

    #[test]
    fn success_reply_serializes_all_sections() {
        let profile = |name: &str| CompanyProfile {
            company_name: name.to_string(),
            company_description: format!("{} builds software.", name),
            industry_type: "Software".to_string(),
            company_size: "50".to_string(),
            specialties: vec!["automation".to_string()],
        };
        let report = AnalysisReport {
            match_score: "Strong".to_string(),
            summary: "Similar buyers.".to_string(),
            similarities: vec!["Same market".to_string()],
            differences: vec!["Team size".to_string()],
        };

        let response = AnalyzeResponse::success(profile("Alpha"), profile("Beta"), report);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["user_profile"]["company_name"], "Alpha");
        assert_eq!(value["target_profile"]["company_name"], "Beta");
        assert_eq!(value["analysis_report"]["match_score"], "Strong");
    }
}

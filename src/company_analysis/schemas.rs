// src/company_analysis/schemas.rs
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Contract for records the model must return as JSON. The format
/// instructions travel inside the system prompt; the schema name shows up
/// in violation errors so the failing call site is obvious from logs.
pub trait StructuredRecord: DeserializeOwned {
    const SCHEMA_NAME: &'static str;

    fn format_instructions() -> &'static str;
}

/// Structured data for a single company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_name: String,
    pub company_description: String,
    pub industry_type: String,
    pub company_size: String,
    pub specialties: Vec<String>,
}

const PROFILE_FORMAT_INSTRUCTIONS: &str = r#"Respond with a single JSON object named CompanyProfile containing exactly these fields:
- "company_name" (string): The official name of the company.
- "company_description" (string): A detailed paragraph describing the company's business and mission.
- "industry_type" (string): The primary industry the company operates in.
- "company_size" (string): The approximate number of employees.
- "specialties" (array of strings): A list of the company's key specialties, services, or products.
Every field is required. Do not add any other fields or commentary."#;

impl StructuredRecord for CompanyProfile {
    const SCHEMA_NAME: &'static str = "CompanyProfile";

    fn format_instructions() -> &'static str {
        PROFILE_FORMAT_INSTRUCTIONS
    }
}

/// Structured data for the final business match report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub match_score: String,
    pub summary: String,
    pub similarities: Vec<String>,
    pub differences: Vec<String>,
}

const REPORT_FORMAT_INSTRUCTIONS: &str = r#"Respond with a single JSON object named AnalysisReport containing exactly these fields:
- "match_score" (string): The final matching score: 'Strong', 'Common', or 'Weak'.
- "summary" (string): A detailed summary explaining the rationale behind the matching score.
- "similarities" (array of strings): A bulleted list of key similarities between the two companies.
- "differences" (array of strings): A bulleted list of key differences between the two companies.
Every field is required. Do not add any other fields or commentary."#;

impl StructuredRecord for AnalysisReport {
    const SCHEMA_NAME: &'static str = "AnalysisReport";

    fn format_instructions() -> &'static str {
        REPORT_FORMAT_INSTRUCTIONS
    }
}

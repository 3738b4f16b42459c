// src/company_analysis/match_analyzer.rs
use super::deepseek_client::DeepSeekClient;
use super::error::AnalysisError;
use super::schemas::{AnalysisReport, CompanyProfile};
use tracing::info;

const ANALYST_SYSTEM_PROMPT: &str = "You are a world-class business analyst. Based on the two company profiles provided, perform a detailed comparative analysis. Your output must be a structured JSON object conforming to the AnalysisReport model.";

/// Compares two extracted profiles in a single model call. Runs strictly
/// after both extractions since it consumes their output.
pub struct MatchAnalyzer<'a> {
    client: &'a DeepSeekClient,
}

impl<'a> MatchAnalyzer<'a> {
    pub fn new(client: &'a DeepSeekClient) -> Self {
        Self { client }
    }

    /// Company A is the requesting side, Company B the target.
    pub async fn analyze(
        &self,
        company_a: &CompanyProfile,
        company_b: &CompanyProfile,
    ) -> Result<AnalysisReport, AnalysisError> {
        let prompt = build_comparison_prompt(company_a, company_b);

        let report: AnalysisReport = self
            .client
            .invoke_structured(ANALYST_SYSTEM_PROMPT, &prompt)
            .await?;

        info!("Match analysis complete: score {}", report.match_score);
        Ok(report)
    }
}

fn build_comparison_prompt(company_a: &CompanyProfile, company_b: &CompanyProfile) -> String {
    format!(
        r#"Please analyze the following two companies and generate a match report.

**Company A Profile:**
- Name: {}
- Description: {}
- Industry: {}
- Size: {}
- Specialties: {}

**Company B Profile:**
- Name: {}
- Description: {}
- Industry: {}
- Size: {}
- Specialties: {}"#,
        company_a.company_name,
        company_a.company_description,
        company_a.industry_type,
        company_a.company_size,
        company_a.specialties.join(", "),
        company_b.company_name,
        company_b.company_description,
        company_b.industry_type,
        company_b.company_size,
        company_b.specialties.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, specialty: &str) -> CompanyProfile {
        CompanyProfile {
            company_name: name.to_string(),
            company_description: format!("{} builds software.", name),
            industry_type: "Software".to_string(),
            company_size: "50".to_string(),
            specialties: vec![specialty.to_string(), "consulting".to_string()],
        }
    }

    #[test]
    fn prompt_interpolates_every_field_of_both_profiles() {
        let a = profile("Aurora Metrics", "dashboards");
        let b = profile("Beacon Logistics", "fleet routing");

        let prompt = build_comparison_prompt(&a, &b);

        assert!(prompt.contains("**Company A Profile:**"));
        assert!(prompt.contains("**Company B Profile:**"));
        for value in [
            "Aurora Metrics",
            "Aurora Metrics builds software.",
            "Beacon Logistics",
            "Beacon Logistics builds software.",
            "Software",
            "50",
        ] {
            assert!(prompt.contains(value), "missing {value}");
        }
    }

    #[test]
    fn prompt_joins_specialties_with_commas() {
        let a = profile("Aurora Metrics", "dashboards");
        let b = profile("Beacon Logistics", "fleet routing");

        let prompt = build_comparison_prompt(&a, &b);

        assert!(prompt.contains("dashboards, consulting"));
        assert!(prompt.contains("fleet routing, consulting"));
    }

    #[test]
    fn company_a_section_comes_first() {
        let a = profile("Aurora Metrics", "dashboards");
        let b = profile("Beacon Logistics", "fleet routing");

        let prompt = build_comparison_prompt(&a, &b);

        let position_a = prompt.find("**Company A Profile:**").unwrap();
        let position_b = prompt.find("**Company B Profile:**").unwrap();
        assert!(position_a < position_b);
    }
}

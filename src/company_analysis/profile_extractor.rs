// src/company_analysis/profile_extractor.rs
use super::agent::ResearchTools;
use super::deepseek_client::DeepSeekClient;
use super::error::AnalysisError;
use super::schemas::CompanyProfile;
use tracing::{info, warn};

const RESEARCHER_SYSTEM_PROMPT: &str = "You are an expert business researcher. Your task is to visit the provided URL and extract key information about the company. Fill in all fields of the CompanyProfile structure accurately.";

/// Turns one company URL into a validated profile. Runs once per URL and
/// holds no state between calls.
pub struct ProfileExtractor<'a> {
    client: &'a DeepSeekClient,
    tools: &'a ResearchTools,
}

impl<'a> ProfileExtractor<'a> {
    pub fn new(client: &'a DeepSeekClient, tools: &'a ResearchTools) -> Self {
        Self { client, tools }
    }

    pub async fn extract(&self, url: &str) -> Result<CompanyProfile, AnalysisError> {
        let prompt = self.build_research_prompt(url).await;

        let profile: CompanyProfile = self
            .client
            .invoke_structured(RESEARCHER_SYSTEM_PROMPT, &prompt)
            .await?;

        info!("Extracted profile for {}: {}", url, profile.company_name);
        Ok(profile)
    }

    /// The search tool supplies context the hosted model cannot browse for
    /// itself. A failed or empty search degrades to the URL-only prompt and
    /// never fails the extraction.
    async fn build_research_prompt(&self, url: &str) -> String {
        let mut prompt = format!("Please research the company at this URL: {}", url);

        if let Some(search) = &self.tools.web_search {
            match search.search(&company_query(url)).await {
                Ok(hits) if !hits.is_empty() => {
                    prompt.push_str("\n\nWeb search results for additional context:\n");
                    for hit in &hits {
                        prompt.push_str(&format!("- {}: {}\n", hit.title, hit.snippet));
                    }
                }
                Ok(_) => warn!("Web search returned no results for {}", url),
                Err(e) => warn!("Web search failed for {}: {}", url, e),
            }
        }

        prompt
    }
}

/// Shape a search query from the URL: the bare host reads better as a query
/// than a full address with path segments.
fn company_query(url: &str) -> String {
    let stripped = url
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.");
    let host = stripped.split('/').next().unwrap_or(stripped);

    if host.is_empty() {
        url.trim().to_string()
    } else {
        format!("{} company", host)
    }
}

// src/company_analysis/agent.rs
use super::deepseek_client::DeepSeekClient;
use super::error::AnalysisError;
use crate::config::AppConfig;
use crate::tools::web_search::WebSearchTool;
use std::env;
use tracing::warn;

/// Auxiliary capabilities handed to the pipeline next to the model client.
pub struct ResearchTools {
    pub web_search: Option<WebSearchTool>,
}

/// Build the model client and its tool list for one request. The credential
/// is resolved here, at build time: an explicit config override first (tests
/// use it), then the process environment.
pub fn build_agent(config: &AppConfig) -> Result<(DeepSeekClient, ResearchTools), AnalysisError> {
    let api_key = config
        .deepseek
        .api_key
        .clone()
        .or_else(|| env::var("DEEPSEEK_API_KEY").ok())
        .ok_or(AnalysisError::MissingApiKey)?;

    let client = DeepSeekClient::new(api_key, &config.deepseek)?;

    let web_search = if config.search.enabled {
        match WebSearchTool::new(&config.search) {
            Ok(tool) => Some(tool),
            Err(e) => {
                warn!("Web search tool unavailable: {}", e);
                None
            }
        }
    } else {
        None
    };

    Ok((client, ResearchTools { web_search }))
}

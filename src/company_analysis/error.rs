// src/company_analysis/error.rs
use thiserror::Error;

/// Failures along the extraction/analysis pipeline. Configuration problems
/// are kept distinct from upstream ones so a missing credential never reads
/// like a flaky API.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("DEEPSEEK_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("DeepSeek request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("DeepSeek API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("DeepSeek reply contained no message content")]
    EmptyReply,

    #[error("{schema} schema violation: {source}")]
    SchemaViolation {
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl AnalysisError {
    /// Coarse label used in handler log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingApiKey | Self::ClientBuild(_) => "configuration",
            Self::Http(_) | Self::Api { .. } | Self::EmptyReply => "upstream",
            Self::SchemaViolation { .. } => "schema",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_a_configuration_error() {
        assert_eq!(AnalysisError::MissingApiKey.kind(), "configuration");
    }

    #[test]
    fn schema_violation_names_the_schema() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = AnalysisError::SchemaViolation {
            schema: "CompanyProfile",
            source,
        };

        assert_eq!(error.kind(), "schema");
        assert!(error.to_string().contains("CompanyProfile"));
    }
}

// src/company_analysis/deepseek_client.rs
use super::error::AnalysisError;
use super::schemas::StructuredRecord;
use crate::config::DeepSeekConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Chat-completions client pinned to one model and sampling temperature.
/// Every structured call goes through [`DeepSeekClient::invoke_structured`],
/// the single place where a reply is coerced into a typed record.
pub struct DeepSeekClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

impl DeepSeekClient {
    /// The timeout is deliberate: without it a stalled upstream would hold
    /// the request open indefinitely.
    pub fn new(api_key: String, settings: &DeepSeekConfig) -> Result<Self, AnalysisError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(AnalysisError::ClientBuild)?;

        Ok(Self {
            client,
            api_key,
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
        })
    }

    /// Ask the model for a record of type `T` in JSON mode. The schema's
    /// format instructions are appended to the system prompt, and a reply
    /// that cannot be coerced into `T` surfaces as a schema violation.
    pub async fn invoke_structured<T: StructuredRecord>(
        &self,
        system: &str,
        user: &str,
    ) -> Result<T, AnalysisError> {
        let system_prompt = format!("{}\n\n{}", system, T::format_instructions());
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            temperature: self.temperature,
        };

        info!("Requesting {} from model {}", T::SCHEMA_NAME, self.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Api { status, body });
        }

        let reply: ChatResponse = response.json().await?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AnalysisError::EmptyReply)?;

        debug!("Received {} characters of reply content", content.len());

        let payload = extract_json_payload(&content);
        serde_json::from_str(payload).map_err(|source| AnalysisError::SchemaViolation {
            schema: T::SCHEMA_NAME,
            source,
        })
    }
}

/// Models occasionally wrap JSON-mode output in markdown fences or a line of
/// prose. Strip the fences and fall back to the outermost object.
fn extract_json_payload(content: &str) -> &str {
    let trimmed = content.trim();

    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .map(str::trim_start)
        .unwrap_or(trimmed);
    let unfenced = unfenced
        .strip_suffix("```")
        .map(str::trim_end)
        .unwrap_or(unfenced);

    match (unfenced.find('{'), unfenced.rfind('}')) {
        (Some(start), Some(end)) if start < end => &unfenced[start..=end],
        _ => unfenced,
    }
}

// src/tools/web_search.rs
use crate::config::SearchConfig;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Error)]
pub enum WebSearchError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("search endpoint returned {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Clone)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
}

/// DuckDuckGo search against the JavaScript-free HTML endpoint.
pub struct WebSearchTool {
    client: reqwest::Client,
    base_url: String,
    max_results: usize,
}

impl WebSearchTool {
    pub fn new(settings: &SearchConfig) -> Result<Self, WebSearchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(WebSearchError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            max_results: settings.max_results,
        })
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>, WebSearchError> {
        info!("Searching the web for: {}", query);

        let response = self
            .client
            .get(format!("{}/html/", self.base_url))
            .query(&[("q", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WebSearchError::Status(response.status()));
        }

        let html = response.text().await?;
        let hits = parse_results(&html, self.max_results);

        info!("Web search returned {} results", hits.len());
        Ok(hits)
    }
}

fn parse_results(html: &str, max_results: usize) -> Vec<SearchHit> {
    let document = Html::parse_document(html);
    let result_selectors = ["div.result", "div.web-result"];

    let mut hits = Vec::new();
    for selector_str in result_selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            for element in document.select(&selector) {
                let title = find_text(&element, &["a.result__a", "h2.result__title"]);
                let snippet =
                    find_text(&element, &["a.result__snippet", "div.result__snippet"]);

                if let Some(title) = title {
                    hits.push(SearchHit {
                        title,
                        snippet: snippet.unwrap_or_default(),
                    });
                    if hits.len() >= max_results {
                        return hits;
                    }
                }
            }
        }
        if !hits.is_empty() {
            break;
        }
    }

    hits
}

fn find_text(element: &ElementRef<'_>, selectors: &[&str]) -> Option<String> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(found) = element.select(&selector).next() {
                let text = clean_text(&found.text().collect::<Vec<_>>().join(" "));
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
    }
    None
}

fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <html><body>
          <div class="result">
            <a class="result__a" href="https://acme.example">Acme Corporation - Home</a>
            <a class="result__snippet">Acme builds  industrial
              automation systems.</a>
          </div>
          <div class="result">
            <a class="result__a" href="https://acme.example/about">About Acme</a>
            <a class="result__snippet">Founded in 1990.</a>
          </div>
          <div class="result">
            <a class="result__a" href="https://acme.example/jobs">Careers</a>
            <a class="result__snippet">Open positions.</a>
          </div>
        </body></html>
    "#;

    #[test]
    fn parses_titles_and_snippets() {
        let hits = parse_results(FIXTURE, 10);

        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].title, "Acme Corporation - Home");
        assert_eq!(hits[0].snippet, "Acme builds industrial automation systems.");
    }

    #[test]
    fn caps_results_at_max() {
        let hits = parse_results(FIXTURE, 2);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn empty_document_yields_no_hits() {
        assert!(parse_results("<html><body></body></html>", 5).is_empty());
    }

    #[test]
    fn result_without_title_is_skipped() {
        let html = r#"<div class="result"><a class="result__snippet">orphan</a></div>"#;
        assert!(parse_results(html, 5).is_empty());
    }
}

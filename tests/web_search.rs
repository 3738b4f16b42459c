//! Integration tests for the DuckDuckGo HTML search tool.

use match_analyzer::config::SearchConfig;
use match_analyzer::tools::web_search::WebSearchError;
use match_analyzer::tools::WebSearchTool;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESULTS_PAGE: &str = r#"
<html><body>
  <div class="result">
    <a class="result__a" href="https://acme.example">Acme Corporation - Home</a>
    <a class="result__snippet">Acme builds industrial automation systems.</a>
  </div>
  <div class="result">
    <a class="result__a" href="https://acme.example/about">About Acme</a>
    <a class="result__snippet">Founded in 1990, Acme employs 300 people.</a>
  </div>
  <div class="result">
    <a class="result__a" href="https://acme.example/jobs">Careers at Acme</a>
    <a class="result__snippet">Open positions in Ohio.</a>
  </div>
</body></html>
"#;

fn test_tool(base_url: &str, max_results: usize) -> WebSearchTool {
    let mut settings = SearchConfig::default();
    settings.base_url = base_url.to_string();
    settings.timeout_secs = 5;
    settings.max_results = max_results;

    WebSearchTool::new(&settings).expect("tool construction should not fail")
}

#[tokio::test]
async fn search_parses_result_titles_and_snippets() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/html/"))
        .and(query_param("q", "acme.example company"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS_PAGE))
        .mount(&server)
        .await;

    let tool = test_tool(&server.uri(), 10);
    let hits = tool
        .search("acme.example company")
        .await
        .expect("should parse results page");

    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].title, "Acme Corporation - Home");
    assert_eq!(hits[0].snippet, "Acme builds industrial automation systems.");
    assert_eq!(hits[2].title, "Careers at Acme");
}

#[tokio::test]
async fn search_caps_results_at_the_configured_max() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS_PAGE))
        .mount(&server)
        .await;

    let tool = test_tool(&server.uri(), 2);
    let hits = tool
        .search("acme.example company")
        .await
        .expect("should parse results page");

    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/html/"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let tool = test_tool(&server.uri(), 5);
    let result = tool.search("acme.example company").await;

    match result.expect_err("429 must surface as an error") {
        WebSearchError::Status(status) => assert_eq!(status.as_u16(), 429),
        other => panic!("expected status error, got: {other}"),
    }
}

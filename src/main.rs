use anyhow::Result;
use match_analyzer::{config::AppConfig, start_web_server};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up DEEPSEEK_API_KEY and friends from a .env file when present.
    dotenvy::dotenv().ok();

    // Initialize logging first
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,match_analyzer=debug")),
        )
        .init();

    let config = AppConfig::load()?;

    info!("Starting Business Match Analyzer API Server");
    info!(
        "Environment: {}",
        std::env::var("BIZMATCH_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    );
    info!("DeepSeek endpoint: {}", config.deepseek.base_url);
    info!(
        "Web search: {}",
        if config.search.enabled {
            "enabled"
        } else {
            "disabled"
        }
    );

    start_web_server(config).await
}

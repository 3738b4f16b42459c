// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepSeekConfig {
    #[serde(default = "default_deepseek_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_deepseek_timeout")]
    pub timeout_secs: u64,
    /// Credential override. Normally the key comes from DEEPSEEK_API_KEY at
    /// agent build time; this field exists so tests can inject one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_search_enabled")]
    pub enabled: bool,
    #[serde(default = "default_search_base_url")]
    pub base_url: String,
    #[serde(default = "default_search_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

/// Runtime configuration, built once at startup and handed to the web layer.
/// Handlers reach it through Rocket managed state; nothing global.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub deepseek: DeepSeekConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: Option<AppConfig>,
    production: Option<AppConfig>,
}

impl AppConfig {
    /// Load configuration for the selected environment. A missing
    /// config.yaml or profile falls back to built-in defaults; the only
    /// hard-required external value is the API credential, and that is
    /// checked where the agent is built.
    pub fn load() -> Result<Self> {
        let environment = Self::environment_name();
        info!("Loading configuration for environment: {}", environment);

        let mut config = Self::load_from_file(&environment)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn environment_name() -> String {
        std::env::var("BIZMATCH_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(environment: &str) -> Result<Self> {
        let config_path = PathBuf::from("config.yaml");
        if !config_path.exists() {
            info!("config.yaml not found, using built-in defaults");
            return Ok(Self::default());
        }

        let config_content =
            std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        let selected = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(selected.unwrap_or_default())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var("DEEPSEEK_API_URL") {
            self.deepseek.base_url = base_url;
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for DeepSeekConfig {
    fn default() -> Self {
        Self {
            base_url: default_deepseek_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_deepseek_timeout(),
            api_key: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: default_search_enabled(),
            base_url: default_search_base_url(),
            timeout_secs: default_search_timeout(),
            max_results: default_max_results(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_deepseek_base_url() -> String {
    "https://api.deepseek.com".to_string()
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_deepseek_timeout() -> u64 {
    60
}

fn default_search_enabled() -> bool {
    true
}

fn default_search_base_url() -> String {
    "https://html.duckduckgo.com".to_string()
}

fn default_search_timeout() -> u64 {
    10
}

fn default_max_results() -> usize {
    5
}

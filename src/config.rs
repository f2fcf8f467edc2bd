//! Configuration loading and validation
//!
//! This module provides:
//! - `Config` - Application configuration loaded from config.toml
//! - `RuntimeConfig` - The validated configuration handed to the components

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::auth::ApiKeyAuth;
use crate::error::ConfigError;

/// Default catalog endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://hackathon-apis.vercel.app/api/products";

/// Default OpenAI-compatible base URL for Gemini
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Environment variable holding the provider API key
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Main configuration structure loaded from config.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub agent: AgentConfig,
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the config directory path (~/.config/shopkeep)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("shopkeep"))
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }
}

/// LLM agent configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Model identifier sent with every request
    pub model: String,
    /// OpenAI-compatible base URL; `chat/completions` is appended
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub name: String,
    /// System instruction for the agent
    pub instructions: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            name: crate::prompts::AGENT_NAME.to_string(),
            instructions: crate::prompts::AGENT_INSTRUCTIONS.to_string(),
            max_tokens: None,
            temperature: None,
            timeout_secs: 120,
        }
    }
}

/// Product catalog configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub url: String,
    /// Maximum number of matches shown
    pub max_results: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
            max_results: 5,
            timeout_secs: 30,
        }
    }
}

/// Validated agent settings
#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub name: String,
    pub instructions: String,
    pub model: String,
    /// Full chat completions endpoint
    pub endpoint: Url,
    pub auth: ApiKeyAuth,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub timeout_secs: u64,
}

/// Validated catalog settings
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub url: Url,
    pub max_results: usize,
    pub timeout_secs: u64,
}

/// Configuration resolved once at startup and passed to each component
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub agent: AgentSettings,
    pub catalog: CatalogSettings,
}

impl RuntimeConfig {
    /// Resolve against the process environment
    pub fn from_env(config: &Config) -> Result<Self, ConfigError> {
        Self::resolve(config, |var| std::env::var(var).ok())
    }

    /// Resolve using `lookup` to read environment variables
    pub fn resolve(
        config: &Config,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let auth = ApiKeyAuth::from_lookup(&config.agent.api_key_env, lookup)?;

        if config.catalog.max_results == 0 {
            return Err(ConfigError::ZeroResults);
        }

        let catalog_url = parse_url("catalog.url", &config.catalog.url)?;
        let endpoint = chat_completions_endpoint(&config.agent.base_url)?;

        Ok(Self {
            agent: AgentSettings {
                name: config.agent.name.clone(),
                instructions: config.agent.instructions.clone(),
                model: config.agent.model.clone(),
                endpoint,
                auth,
                max_tokens: config.agent.max_tokens,
                temperature: config.agent.temperature,
                timeout_secs: config.agent.timeout_secs,
            },
            catalog: CatalogSettings {
                url: catalog_url,
                max_results: config.catalog.max_results,
                timeout_secs: config.catalog.timeout_secs,
            },
        })
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        source,
    })
}

/// Build `<base>/chat/completions`, tolerating a base URL without a trailing slash
fn chat_completions_endpoint(base_url: &str) -> Result<Url, ConfigError> {
    let mut base = base_url.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    let base = parse_url("agent.base_url", &base)?;
    base.join("chat/completions")
        .map_err(|source| ConfigError::InvalidUrl {
            field: "agent.base_url",
            value: base_url.to_string(),
            source,
        })
}

//! Error types shared across the assistant
//!
//! Each component returns its own error enum. `AppError` collects the ones
//! that are allowed to end the process and maps them to exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code for a successful run
pub const EXIT_OK: u8 = 0;
/// Exit code for configuration and console I/O failures
pub const EXIT_CONFIG: u8 = 1;
/// Exit code for an unrecoverable agent failure
pub const EXIT_AGENT: u8 = 2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing {var} (set it in the environment or a .env file)")]
    MissingApiKey { var: String },
    #[error("{var} is set but empty")]
    EmptyApiKey { var: String },
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid {field} URL '{value}': {source}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("catalog.max_results must be at least 1")]
    ZeroResults,
    #[error("failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("product at index {index} has no '{field}' field")]
    MissingField { index: usize, field: &'static str },
}

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("failed to reach the model provider: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("failed to parse model response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("model returned no text output")]
    EmptyResponse,
    #[error("API key contains characters not allowed in a header")]
    InvalidApiKey,
}

/// Failures that terminate a run
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Agent(#[from] AgentError),
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Io(_) => EXIT_CONFIG,
            Self::Agent(_) => EXIT_AGENT,
        }
    }

    /// Line shown to the user on stderr
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(e) => format!("Configuration error: {}", e),
            Self::Agent(e) => format!("⚠️ Agent Error: {}", e),
            Self::Io(e) => format!("Console error: {}", e),
        }
    }
}

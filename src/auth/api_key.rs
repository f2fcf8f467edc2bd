//! API key authentication

use std::fmt;

use crate::error::ConfigError;

/// API key authentication handler
#[derive(Clone)]
pub struct ApiKeyAuth {
    api_key: String,
}

impl ApiKeyAuth {
    /// Create from an API key string
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }

    /// Load API key through `lookup`, rejecting missing or blank values
    pub fn from_lookup(
        var: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = lookup(var).ok_or_else(|| ConfigError::MissingApiKey {
            var: var.to_string(),
        })?;
        let auth = Self::new(api_key.trim().to_string());
        if auth.api_key.is_empty() {
            return Err(ConfigError::EmptyApiKey {
                var: var.to_string(),
            });
        }
        Ok(auth)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

// Keep the key out of logs and panic messages
impl fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

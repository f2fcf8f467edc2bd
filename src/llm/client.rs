//! OpenAI-compatible chat completions client

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;
use url::Url;

use super::types::*;
use crate::auth::ApiKeyAuth;
use crate::config::AgentSettings;
use crate::error::{AgentError, ConfigError};

/// Chat completions client
pub struct ChatClient {
    http_client: reqwest::Client,
    auth: ApiKeyAuth,
    endpoint: Url,
    model: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl ChatClient {
    /// Create a client from resolved agent settings
    pub fn new(settings: &AgentSettings) -> Result<Self, ConfigError> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http_client,
            auth: settings.auth.clone(),
            endpoint: settings.endpoint.clone(),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build headers for API requests
    fn headers(&self) -> Result<HeaderMap, AgentError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut bearer =
            HeaderValue::from_str(&self.auth.bearer()).map_err(|_| AgentError::InvalidApiKey)?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        Ok(headers)
    }

    /// Send one chat completions request (non-streaming)
    pub async fn complete(&self, messages: Vec<ChatMessage>) -> Result<ChatResponse, AgentError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!(
            "POST {} model={} messages={}",
            self.endpoint,
            self.model,
            request.messages.len()
        );

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = ApiErrorBody::message(&body).unwrap_or(body);
            return Err(AgentError::Api { status, message });
        }

        serde_json::from_str(&body).map_err(AgentError::Decode)
    }
}

//! Single-turn shopping agent

use std::fmt;

use async_trait::async_trait;
use tracing::{debug, info};

use super::client::ChatClient;
use super::types::ChatMessage;
use crate::config::AgentSettings;
use crate::error::{AgentError, ConfigError};

/// The agent's final text output for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentReply {
    pub text: String,
}

impl fmt::Display for AgentReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Anything that can answer a shopping query
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, query: &str) -> Result<AgentReply, AgentError>;
}

/// LLM-backed agent with a static instruction and no tools or memory.
///
/// Every call sends exactly the system instruction and the query; nothing is
/// carried over between calls.
pub struct Agent {
    name: String,
    instructions: String,
    client: ChatClient,
}

impl Agent {
    pub fn new(name: impl Into<String>, instructions: impl Into<String>, client: ChatClient) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            client,
        }
    }

    /// Build the agent described by the resolved settings
    pub fn from_settings(settings: &AgentSettings) -> Result<Self, ConfigError> {
        let client = ChatClient::new(settings)?;
        Ok(Self::new(&settings.name, &settings.instructions, client))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn messages(&self, query: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(&self.instructions),
            ChatMessage::user(query),
        ]
    }
}

#[async_trait]
impl Responder for Agent {
    async fn respond(&self, query: &str) -> Result<AgentReply, AgentError> {
        debug!("{} ({}) handling query", self.name, self.client.model());

        let response = self.client.complete(self.messages(query)).await?;
        if let Some(usage) = response.usage {
            info!(
                "Agent usage: prompt {} tokens, completion {} tokens",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        let text = response.text().ok_or(AgentError::EmptyResponse)?;
        Ok(AgentReply {
            text: text.to_string(),
        })
    }
}

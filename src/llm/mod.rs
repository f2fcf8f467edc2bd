//! LLM client and agent

mod agent;
mod client;
mod types;

pub use agent::{Agent, AgentReply, Responder};
pub use client::ChatClient;
pub use types::{ChatMessage, ChatResponse, Role, Usage};

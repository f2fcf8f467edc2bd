//! Shopkeep - a command-line shopping assistant
//!
//! One query goes to two independent places: the product catalog, which is
//! searched client-side by title, and an LLM agent that writes a
//! recommendation. Both answers are printed together.
//!
//! # Example
//!
//! ```no_run
//! use shopkeep::{CatalogClient, Config, RuntimeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let runtime = RuntimeConfig::from_env(&Config::load()?)?;
//!     let catalog = CatalogClient::new(&runtime.catalog)?;
//!
//!     println!("{}", catalog.search_products("shirt").await);
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompts;

pub use app::App;
pub use catalog::{CatalogClient, Product};
pub use config::{Config, RuntimeConfig};
pub use error::{AgentError, AppError, CatalogError, ConfigError};
pub use llm::{Agent, AgentReply, Responder};

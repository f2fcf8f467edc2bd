//! Orchestrates one assistant run: greet, read a query, ask both sources, print.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info};

use crate::catalog::CatalogClient;
use crate::config::RuntimeConfig;
use crate::error::{AppError, ConfigError};
use crate::llm::{Agent, Responder};
use crate::prompts::{AGENT_HEADER, GREETING, PRODUCTS_HEADER, QUERY_PROMPT};

pub struct App {
    agent: Box<dyn Responder>,
    catalog: CatalogClient,
}

impl App {
    /// Build the agent and catalog client from resolved configuration
    pub fn new(config: &RuntimeConfig) -> Result<Self, ConfigError> {
        let agent = Agent::from_settings(&config.agent)?;
        let catalog = CatalogClient::new(&config.catalog)?;
        Ok(Self::with_parts(Box::new(agent), catalog))
    }

    pub fn with_parts(agent: Box<dyn Responder>, catalog: CatalogClient) -> Self {
        Self { agent, catalog }
    }

    /// Run one query from `input`, writing every section to `out`.
    ///
    /// The catalog section is written even when the agent fails; the agent
    /// error is then returned for the caller to report.
    pub async fn run<R, W>(&self, input: R, out: &mut W) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "{}", GREETING)?;
        write!(out, "{}", QUERY_PROMPT)?;
        out.flush()?;

        let query = read_query(input).await?;
        info!("Query: {:?}", query);

        // Independent lookups; output order below is fixed regardless.
        let (answer, results) = tokio::join!(
            self.agent.respond(&query),
            self.catalog.search_products(&query)
        );

        if !results.is_empty() {
            writeln!(out, "\n{}\n{}", PRODUCTS_HEADER, results)?;
        }

        let answer = answer.map_err(|e| {
            error!("Agent failed: {}", e);
            AppError::from(e)
        })?;
        writeln!(out, "\n{}\n{}", AGENT_HEADER, answer)?;
        out.flush()?;

        Ok(())
    }
}

/// Read one line, without its line ending
async fn read_query<R: AsyncBufRead + Unpin>(mut input: R) -> Result<String, AppError> {
    let mut line = String::new();
    let n = input.read_line(&mut line).await?;
    if n == 0 {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "no query entered",
        )));
    }

    let trimmed = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(&line);
    Ok(trimmed.to_string())
}

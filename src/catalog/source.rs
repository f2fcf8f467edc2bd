//! Where products come from

use async_trait::async_trait;
use serde::de::Error as _;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::Product;
use crate::error::{CatalogError, ConfigError};

/// A source of the full product list
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch every product, in catalog order
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Fetches the product list with a single GET request
pub struct HttpProductSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpProductSource {
    pub fn new(url: Url, timeout_secs: u64) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .user_agent(format!("Shopkeep/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let request_error = |source: reqwest::Error| CatalogError::Request {
            url: self.url.to_string(),
            source,
        };

        let response = self
            .client
            .get(self.url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status,
                url: self.url.to_string(),
            });
        }

        let body = response.text().await.map_err(request_error)?;
        debug!("Catalog returned {} bytes", body.len());
        parse_products(&body)
    }
}

/// Parse a catalog body: a JSON array whose elements are all objects
pub fn parse_products(body: &str) -> Result<Vec<Product>, CatalogError> {
    let items: Vec<Value> = serde_json::from_str(body)?;

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(CatalogError::Decode(serde_json::Error::custom(format!(
                    "product at index {} is not an object",
                    index
                ))));
            }
            Ok(serde_json::from_value::<Product>(item)?)
        })
        .collect()
}

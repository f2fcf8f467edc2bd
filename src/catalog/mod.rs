//! Product catalog search
//!
//! The catalog is fetched fresh on every search and filtered client-side.
//! Every failure is folded into the returned text so a broken catalog never
//! stops the rest of the run.

mod filter;
mod source;

pub use filter::{filter_products, matches, render};
pub use source::{parse_products, HttpProductSource, ProductSource};

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::CatalogSettings;
use crate::error::{CatalogError, ConfigError};
use crate::prompts::CATALOG_ERROR_PREFIX;

/// A catalog entry. Fields beyond title and price are ignored.
///
/// `None` means the key is absent. A present `null` title is rejected while
/// parsing; a present `null` price is kept as `Value::Null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<String>,
    /// Any JSON scalar, shown as-is
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Value>,
}

/// Wrap a field that is present in the object, whatever its value
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Searches the product catalog
pub struct CatalogClient {
    source: Box<dyn ProductSource>,
    max_results: usize,
}

impl CatalogClient {
    /// Create a client for the configured HTTP catalog
    pub fn new(settings: &CatalogSettings) -> Result<Self, ConfigError> {
        let source = HttpProductSource::new(settings.url.clone(), settings.timeout_secs)?;
        Ok(Self::with_source(Box::new(source), settings.max_results))
    }

    /// Create a client over any product source
    pub fn with_source(source: Box<dyn ProductSource>, max_results: usize) -> Self {
        Self {
            source,
            max_results,
        }
    }

    /// Fetch the catalog and return the formatted matches for `query`
    pub async fn find_matches(&self, query: &str) -> Result<Vec<String>, CatalogError> {
        let products = self.source.fetch().await?;
        let lines = filter_products(&products, query, self.max_results)?;
        info!(
            "Catalog search for {:?}: {} products, {} shown",
            query,
            products.len(),
            lines.len()
        );
        Ok(lines)
    }

    /// Search the catalog, always producing display text.
    ///
    /// Returns up to `max_results` lines, the no-match sentinel, or a single
    /// `⚠️ API Error:` line describing what went wrong.
    pub async fn search_products(&self, query: &str) -> String {
        match self.find_matches(query).await {
            Ok(lines) => render(&lines),
            Err(e) => {
                warn!("Catalog search failed: {}", e);
                format!("{}{}", CATALOG_ERROR_PREFIX, e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::NO_MATCHES;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Serves a fixed catalog body and counts fetches
    struct CannedSource {
        body: &'static str,
        fetches: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ProductSource for CannedSource {
        async fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            parse_products(self.body)
        }
    }

    fn client(body: &'static str) -> (CatalogClient, Arc<AtomicUsize>) {
        let fetches = Arc::new(AtomicUsize::new(0));
        let source = CannedSource {
            body,
            fetches: fetches.clone(),
        };
        (CatalogClient::with_source(Box::new(source), 5), fetches)
    }

    const SHIRTS: &str = r#"[{"title":"Blue Jeans","price":1200},{"title":"Red Shirt","price":800},{"title":"Green Shirt","price":850}]"#;

    #[tokio::test]
    async fn test_search_scenario() {
        let (catalog, _) = client(SHIRTS);
        assert_eq!(
            catalog.search_products("shirt").await,
            "- Red Shirt | Rs 800\n- Green Shirt | Rs 850"
        );
    }

    #[tokio::test]
    async fn test_search_empty_catalog() {
        let (catalog, _) = client("[]");
        assert_eq!(catalog.search_products("shirt").await, NO_MATCHES);
        assert_eq!(catalog.search_products("").await, NO_MATCHES);
    }

    #[tokio::test]
    async fn test_search_fetches_every_time() {
        let (catalog, fetches) = client(SHIRTS);
        let first = catalog.search_products("SHIRT").await;
        let second = catalog.search_products("SHIRT").await;
        assert_eq!(first, second);
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_search_at_most_five_lines() {
        let (catalog, _) = client(
            r#"[{"title":"Tee 1","price":1},{"title":"Tee 2","price":2},{"title":"Tee 3","price":3},
                {"title":"Tee 4","price":4},{"title":"Tee 5","price":5},{"title":"Tee 6","price":6},
                {"title":"Tee 7","price":7}]"#,
        );
        let result = catalog.search_products("tee").await;
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| line.to_lowercase().contains("tee")));
        assert_eq!(lines[4], "- Tee 5 | Rs 5");
    }

    #[tokio::test]
    async fn test_search_malformed_catalog() {
        let (catalog, _) = client(r#"{"error":"nope"}"#);
        let result = catalog.search_products("shirt").await;
        assert!(result.starts_with(CATALOG_ERROR_PREFIX));
        assert!(result.contains("malformed catalog response"));
        assert_eq!(result.lines().count(), 1);
    }

    #[tokio::test]
    async fn test_search_null_price_is_displayed() {
        let (catalog, _) = client(r#"[{"title":"Red Shirt","price":null},{"title":"Blue Shirt","price":499}]"#);
        assert_eq!(
            catalog.search_products("shirt").await,
            "- Red Shirt | Rs null\n- Blue Shirt | Rs 499"
        );
    }

    #[tokio::test]
    async fn test_search_null_title_is_an_error() {
        let (catalog, _) = client(r#"[{"title":null,"price":1},{"title":"Red Shirt","price":800}]"#);
        let result = catalog.search_products("shirt").await;
        assert!(result.starts_with(CATALOG_ERROR_PREFIX));
        assert!(result.contains("malformed catalog response"));
    }

    #[tokio::test]
    async fn test_search_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .expect(1)
            .mount(&server)
            .await;

        let settings = CatalogSettings {
            url: url::Url::parse(&format!("{}/api/products", server.uri())).unwrap(),
            max_results: 5,
            timeout_secs: 5,
        };
        let catalog = CatalogClient::new(&settings).unwrap();

        let result = catalog.search_products("shirt").await;
        assert!(result.starts_with(CATALOG_ERROR_PREFIX));
        assert!(result.contains("404"));
    }
}

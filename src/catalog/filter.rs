//! Query matching and result formatting

use serde_json::Value;

use super::Product;
use crate::error::CatalogError;
use crate::prompts::NO_MATCHES;

/// Case-insensitive substring match of `query` against the product title.
///
/// A missing title counts as the empty string.
pub fn matches(product: &Product, query: &str) -> bool {
    let title = product.title.as_deref().unwrap_or("");
    title.to_lowercase().contains(&query.to_lowercase())
}

/// Format every matching product in catalog order and keep the first `max_results`.
///
/// A matching product that lacks a title or price cannot be displayed and
/// fails the whole search.
pub fn filter_products(
    products: &[Product],
    query: &str,
    max_results: usize,
) -> Result<Vec<String>, CatalogError> {
    let mut lines = Vec::new();

    for (index, product) in products.iter().enumerate() {
        if matches(product, query) {
            lines.push(format_product(index, product)?);
        }
    }

    lines.truncate(max_results);
    Ok(lines)
}

/// Join formatted lines, substituting the no-match sentinel for an empty list
pub fn render(lines: &[String]) -> String {
    if lines.is_empty() {
        NO_MATCHES.to_string()
    } else {
        lines.join("\n")
    }
}

fn format_product(index: usize, product: &Product) -> Result<String, CatalogError> {
    let title = product
        .title
        .as_deref()
        .ok_or(CatalogError::MissingField { index, field: "title" })?;
    let price = product
        .price
        .as_ref()
        .ok_or(CatalogError::MissingField { index, field: "price" })?;
    Ok(format!("- {} | Rs {}", title, display_price(price)))
}

/// Strings are shown without quotes; other values use their JSON text
fn display_price(price: &Value) -> String {
    match price {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

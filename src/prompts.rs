//! Centralized prompt definitions and console strings.

/// Greeting shown when the application starts
pub const GREETING: &str = "👋 Hello! 🛒 I'm your Shopping Assistant.";

/// Prompt for the search query
pub const QUERY_PROMPT: &str = "🔍 What would you like to search for today? 📝 ";

/// Header printed above catalog results
pub const PRODUCTS_HEADER: &str = "🛍️ Products Found:";

/// Header printed above the agent's answer
pub const AGENT_HEADER: &str = "🤖 Agent Response:";

/// Display name of the shopping agent
pub const AGENT_NAME: &str = "Shopping Agent";

/// System instruction for the shopping agent
pub const AGENT_INSTRUCTIONS: &str = "You help users find and recommend products.";

/// Shown in place of results when nothing matches
pub const NO_MATCHES: &str = "❌ No matching products found.";

/// Prefix of the inline catalog error line
pub const CATALOG_ERROR_PREFIX: &str = "⚠️ API Error: ";

//! Authentication for the model provider

mod api_key;

pub use api_key::ApiKeyAuth;

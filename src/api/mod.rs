//! Directory service REST API layer

mod client;
mod endpoints;

pub use client::{ApiClient, ApiError};
pub use endpoints::*;

/// Create a client for server-side requests (direct to the API). A bearer
/// token is forwarded when `API_AUTH_TOKEN` is set.
#[cfg(feature = "server")]
pub fn server_client() -> ApiClient {
    let url = std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8000/api".to_string());
    let client = ApiClient::new(url);
    match std::env::var("API_AUTH_TOKEN") {
        Ok(token) if !token.is_empty() => client.with_token(token),
        _ => client,
    }
}

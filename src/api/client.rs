//! HTTP client for the directory service REST API

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Error type for directory service operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Not found")]
    NotFound,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Error body shape used by the directory service
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// REST client for the directory service
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a new client against a base URL such as `http://host:8000/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Create a client with a bearer token (session tokens are minted by an
    /// external endpoint; this layer only forwards them)
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_token {
            Some(token) => req.header("Authorization", format!("Bearer {}", token)),
            None => req,
        }
    }

    /// Execute a GET request, optionally with query parameters
    pub async fn get<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let mut req = self.client.get(self.url(path));
        if !query.is_empty() {
            req = req.query(query);
        }
        Self::decode(self.authorize(req).send().await?).await
    }

    /// Execute a PUT request with a JSON body
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let req = self.client.put(self.url(path)).json(body);
        Self::decode(self.authorize(req).send().await?).await
    }

    /// Execute a DELETE request
    pub async fn delete<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let req = self.client.delete(self.url(path));
        Self::decode(self.authorize(req).send().await?).await
    }

    /// Execute a multipart POST request (document uploads)
    pub async fn post_multipart<T>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let req = self.client.post(self.url(path)).multipart(form);
        Self::decode(self.authorize(req).send().await?).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(err) => err.detail,
                Err(_) => body,
            };
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8000/api");
        assert_eq!(
            client.url("/professionals/p-1"),
            "http://localhost:8000/api/professionals/p-1"
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 422,
            message: "invalid payload".to_string(),
        };
        assert_eq!(err.to_string(), "API error (422): invalid payload");
        assert_eq!(ApiError::NotFound.to_string(), "Not found");
    }
}

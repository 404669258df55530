//! REST API client for the DocuVault backend.
//!
//! JSON over HTTPS under `/api/v1`, bearer-token authenticated except for
//! register and login. One [`ApiClient`] is built per process and shared
//! by every view.

pub mod auth;
pub mod documents;
pub mod reference;

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{error_from_response, AppError, Result};

pub use auth::{AuthResponse, RegisterRequest};
pub use documents::{DocumentFilter, FileUpload, NewDocument, UpdateDocument};

/// HTTP client for the backend API.
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for an API path (`path` starts with `/`).
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.config.base_url.trim_end_matches('/'), path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.url(path))
    }

    /// Send a request and map any non-2xx status to a typed error built
    /// from the backend's error body.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.bytes().await.unwrap_or_default();
        Err(error_from_response(status.as_u16(), &body))
    }

    /// Send a request and decode a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// Decode a body that may or may not carry the `data` envelope.
    pub(crate) async fn send_enveloped<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.send(request).await?;
        let raw: serde_json::Value = response.json().await?;
        let inner = match raw {
            serde_json::Value::Object(mut fields) if fields.contains_key("data") => {
                fields.remove("data").unwrap_or(serde_json::Value::Null)
            }
            other => other,
        };
        serde_json::from_value(inner).map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let mut config = ClientConfig::default();
        config.base_url = "http://localhost:8000/".into();
        let client = ApiClient::new(config).unwrap();
        assert_eq!(
            client.url("/documents/3"),
            "http://localhost:8000/api/v1/documents/3"
        );
    }
}

//! reqwest implementation of the legal API transport

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use registrar::{LegalApiTransport, TransportError};

use crate::config::HttpTransportConfig;

/// HTTP implementation of LegalApiTransport
pub struct HttpTransport {
    client: Client,
    config: HttpTransportConfig,
}

impl HttpTransport {
    /// Create a transport from its configuration
    pub fn new(config: HttpTransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| TransportError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Absolute URL for a relative API path
    pub fn url(&self, path: &str) -> String {
        join_url(&self.config.base_url, path)
    }

    async fn read(response: Response) -> Result<Option<Value>, TransportError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        decode_body(status, &body)
    }
}

#[async_trait]
impl LegalApiTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Option<Value>, TransportError> {
        let url = self.url(path);
        debug!(method = "GET", url = %url, "Legal API request");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Self::read(response).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Option<Value>, TransportError> {
        let url = self.url(path);
        debug!(method = "PUT", url = %url, "Legal API request");

        let response = self
            .client
            .put(&url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Self::read(response).await
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Turn a status and raw body into the transport result.
fn decode_body(status: StatusCode, body: &str) -> Result<Option<Value>, TransportError> {
    if !status.is_success() {
        return Err(TransportError::status(status.as_u16(), body));
    }

    if body.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| TransportError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:5000/api/v2/", "businesses/T1/filings"),
            "http://localhost:5000/api/v2/businesses/T1/filings"
        );
        assert_eq!(
            join_url("http://localhost:5000/api/v2", "/nameRequests/NR%201234567"),
            "http://localhost:5000/api/v2/nameRequests/NR%201234567"
        );
        assert_eq!(
            join_url("http://h/api", "businesses/BC1/filings/9?draft=true"),
            "http://h/api/businesses/BC1/filings/9?draft=true"
        );
    }

    #[test]
    fn test_decode_success_body() {
        let body = decode_body(StatusCode::OK, r#"{"filing":{"header":{}}}"#).unwrap();
        assert_eq!(body, Some(json!({ "filing": { "header": {} } })));
    }

    #[test]
    fn test_decode_empty_body() {
        assert_eq!(decode_body(StatusCode::NO_CONTENT, "").unwrap(), None);
        assert_eq!(decode_body(StatusCode::OK, "  \n").unwrap(), None);
    }

    #[test]
    fn test_decode_not_found() {
        let err = decode_body(StatusCode::NOT_FOUND, r#"{"message":"not found"}"#).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_decode_keeps_error_body() {
        let err = decode_body(StatusCode::BAD_REQUEST, r#"{"errors":[]}"#).unwrap_err();
        match err {
            TransportError::Status { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, r#"{"errors":[]}"#);
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode_body(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[test]
    fn test_url_uses_config() {
        let transport =
            HttpTransport::new(HttpTransportConfig::new("https://legal-api.example/api/v2/"))
                .unwrap();
        assert_eq!(
            transport.url("businesses/BC1234567/tasks"),
            "https://legal-api.example/api/v2/businesses/BC1234567/tasks"
        );
    }
}

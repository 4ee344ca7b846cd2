//! Legal API Transport Port
//!
//! Abstract interface for issuing requests to the legal API.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::TransportError;

/// Request/response transport for the legal API
///
/// Paths are relative (e.g. `businesses/T123/filings`) and may carry a query
/// string; implementations join them to their configured base URL.
///
/// # Example
///
/// ```rust,ignore
/// use registrar::ports::LegalApiTransport;
///
/// struct HttpTransport { /* reqwest client */ }
///
/// #[async_trait]
/// impl LegalApiTransport for HttpTransport {
///     async fn get(&self, path: &str) -> Result<Option<Value>, TransportError> {
///         // GET {base_url}/{path}
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait LegalApiTransport: Send + Sync {
    /// Issue a GET request
    ///
    /// # Returns
    /// The decoded JSON body, `None` when the body is empty.
    /// Non-success statuses are reported as [`TransportError::Status`].
    async fn get(&self, path: &str) -> Result<Option<Value>, TransportError>;

    /// Issue a PUT request with a JSON body
    async fn put(&self, path: &str, body: &Value) -> Result<Option<Value>, TransportError>;
}

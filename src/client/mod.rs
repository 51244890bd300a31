//! Rate-limited HTTP core
//!
//! Everything an endpoint method needs between "typed arguments" and "typed
//! records": query normalization, the call gate, request dispatch, upstream
//! error mapping, and the count/offset pagination loop.

use std::time::Duration;

pub mod http;
pub mod pagination;
pub mod params;

pub use http::ApiClient;
pub use params::{ParamValue, Params};

/// Default service root.
pub const DEFAULT_BASE_URL: &str = "https://api.stlouisfed.org";

/// Time to establish the TCP connection.
pub(crate) const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Overall time limit for one request.
pub(crate) const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client errors
///
/// The gate itself cannot fail; everything here belongs to the request and
/// response layers around it.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The API key is not a 32 character lowercase alphanumeric string
    #[error("invalid API key: expected a 32 character alphanumeric string")]
    InvalidApiKey,

    /// A request argument failed client-side validation
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The service rejected the request with a documented error payload
    #[error("upstream error {code}: {message}")]
    Upstream {
        /// Error code reported by the service
        code: i64,
        /// Human-readable message reported by the service
        message: String,
    },

    /// The service answered with a status the client does not understand
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    /// The service answered with a content type the client does not understand
    #[error("unexpected content type: {0}")]
    UnexpectedContentType(String),

    /// Transport-level failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Validate and normalize an API key: 32 alphanumeric characters, stored
/// lowercase.
pub(crate) fn normalize_api_key(key: &str) -> ClientResult<String> {
    if key.len() == 32 && key.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(key.to_ascii_lowercase())
    } else {
        Err(ClientError::InvalidApiKey)
    }
}

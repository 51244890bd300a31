//! HTTP dispatch for the service API
//!
//! One client instance owns the reqwest client, the API key, and the call
//! gate. Every request acquires the gate exactly once immediately before the
//! GET and proceeds unconditionally once admitted; the gate knows nothing
//! about URLs or bodies.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::client::params::Params;
use crate::client::{
    normalize_api_key, ClientError, ClientResult, HTTP_CONNECT_TIMEOUT, HTTP_REQUEST_TIMEOUT,
};
use crate::rate_limit::{Quota, RateLimiter};

const USER_AGENT: &str = concat!("stlouisfed/", env!("CARGO_PKG_VERSION"));

/// Non-standard status the service uses for "too many calls in a short
/// period", alongside the registered 429.
const HTTP_TOO_MANY_REQUESTS_SHORT_PERIOD: u16 = 420;

/// Statuses whose JSON body carries an `error_code`/`error_message` pair.
const ERROR_PAYLOAD_STATUSES: [u16; 5] =
    [400, 403, HTTP_TOO_MANY_REQUESTS_SHORT_PERIOD, 429, 500];

/// Rate-limited HTTP client for one API key.
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: String,
    limiter: Option<Arc<RateLimiter>>,
}

impl ApiClient {
    /// Create a client for `api_key` against `base_url`.
    ///
    /// `quota` of `None` disables the call gate; requests then go straight to
    /// the transport.
    ///
    /// # Errors
    /// Returns `InvalidApiKey` for a malformed key, or a network error if the
    /// TLS backend cannot be initialized.
    pub fn new(api_key: &str, base_url: impl Into<String>, quota: Option<Quota>) -> ClientResult<Self> {
        let api_key = normalize_api_key(api_key)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let http = Client::builder()
            .connect_timeout(HTTP_CONNECT_TIMEOUT)
            .timeout(HTTP_REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
            limiter: quota.map(|q| Arc::new(RateLimiter::new(q))),
        })
    }

    /// The call gate shared by this client's request paths, if enabled.
    pub fn limiter(&self) -> Option<&Arc<RateLimiter>> {
        self.limiter.as_ref()
    }

    /// Service root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one GET against `endpoint` and return the decoded JSON body.
    ///
    /// `api_key` and `file_type=json` are always appended; `params` carries
    /// everything endpoint-specific.
    pub(crate) async fn get_json(&self, endpoint: &str, params: &Params) -> ClientResult<Value> {
        if let Some(limiter) = &self.limiter {
            limiter.acquire().await;
            debug!(
                remaining = limiter.remaining().await,
                max_calls = limiter.quota().max_calls(),
                "call admitted"
            );
        }

        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, params = params.pairs().len(), "GET");

        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("file_type", "json")])
            .query(params.pairs())
            .send()
            .await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        // Error codes and messages sometimes arrive as XML attributes rather
        // than a JSON body.
        if content_type.starts_with("text/xml") && !status.is_success() {
            let body = response.text().await?;
            return Err(match parse_xml_error(&body) {
                Some((code, message)) => ClientError::Upstream { code, message },
                None => ClientError::UnexpectedContentType(content_type),
            });
        }

        if !content_type.starts_with("application/json") {
            return Err(ClientError::UnexpectedContentType(content_type));
        }

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|e| ClientError::Decode(format!("response is not valid JSON: {e}")))?;

        if ERROR_PAYLOAD_STATUSES.contains(&status.as_u16()) {
            let code = body
                .get("error_code")
                .and_then(Value::as_i64)
                .unwrap_or_else(|| i64::from(status.as_u16()));
            let message = body
                .get("error_message")
                .and_then(Value::as_str)
                .map(collapse_whitespace)
                .unwrap_or_else(|| format!("status {status}"));
            return Err(ClientError::Upstream { code, message });
        }

        if status != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus(status.as_u16()));
        }

        Ok(body)
    }
}

/// Collapse runs of whitespace; upstream error messages arrive padded and
/// line-broken.
fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract `code`/`message` attributes from an XML error document such as
/// `<error code="400" message="Bad Request."/>`.
fn parse_xml_error(body: &str) -> Option<(i64, String)> {
    let code = xml_attribute(body, "code")?.parse().ok()?;
    let message = xml_attribute(body, "message")?;
    Some((code, message))
}

fn xml_attribute(xml: &str, name: &str) -> Option<String> {
    let marker = format!("{name}=\"");
    let start = xml.find(&marker)? + marker.len();
    let end = xml[start..].find('"')? + start;
    Some(xml[start..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_stores_base_url() {
        let client = ApiClient::new(
            "abcdefghijklmnopqrstuvwxyz123456",
            "https://api.stlouisfed.org",
            Some(Quota::default()),
        )
        .unwrap();
        assert_eq!(client.base_url(), "https://api.stlouisfed.org");
        assert!(client.limiter().is_some());
    }

    #[test]
    fn test_client_without_quota_has_no_gate() {
        let client =
            ApiClient::new("abcdefghijklmnopqrstuvwxyz123456", "http://localhost", None).unwrap();
        assert!(client.limiter().is_none());
    }

    #[test]
    fn test_parse_xml_error() {
        let body = r#"<?xml version="1.0"?><error code="429" message="Too many requests."/>"#;
        let (code, message) = parse_xml_error(body).unwrap();
        assert_eq!(code, 429);
        assert_eq!(message, "Too many requests.");
    }

    #[test]
    fn test_parse_xml_error_missing_attributes() {
        assert!(parse_xml_error("<error/>").is_none());
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("Bad  Request.\n  The value for variable api_key is not registered."),
            "Bad Request. The value for variable api_key is not registered."
        );
    }

    #[test]
    fn test_short_period_status_is_in_error_set() {
        assert!(ERROR_PAYLOAD_STATUSES.contains(&HTTP_TOO_MANY_REQUESTS_SHORT_PERIOD));
    }
}

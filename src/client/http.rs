//! HTTP client implementation for the Lithic API.

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, RETRY_AFTER,
};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn, Span};
use url::Url;

use crate::api::AuthStreamEnrollmentService;
use crate::auth::ApiKey;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::options::RequestOptions;

/// The main client for interacting with the Lithic API.
///
/// The client is cheap to clone; clones share one connection pool and one
/// immutable configuration. Resource services are obtained through method
/// calls and issue exactly one HTTP request per operation.
///
/// # Example
///
/// ```no_run
/// use lithic::{ClientConfig, Environment, LithicClient};
///
/// # async fn example() -> lithic::Result<()> {
/// let client = LithicClient::with_config(
///     "your-api-key",
///     ClientConfig::default().with_environment(Environment::Sandbox),
/// )?;
///
/// let enrollment = client.auth_stream_enrollment().retrieve().await?;
/// println!("enrolled: {}", enrollment.enrolled);
/// # Ok(())
/// # }
/// ```
pub struct LithicClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) api_key: ApiKey,
    pub(crate) base_url: Url,
    pub(crate) config: ClientConfig,
}

impl LithicClient {
    /// Create a production client with the default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Self::with_api_key(ApiKey::new(api_key)?, config)
    }

    /// Create a client from `LITHIC_API_KEY` and, if set, `LITHIC_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::with_api_key(ApiKey::from_env()?, ClientConfig::from_env())
    }

    /// Create a client from an already validated [`ApiKey`].
    pub fn with_api_key(api_key: ApiKey, config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "Base URL cannot be used as a base: {}",
                config.base_url
            )));
        }
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(Error::Config(format!(
                "Base URL must not carry a query or fragment: {}",
                config.base_url
            )));
        }

        let user_agent = HeaderValue::try_from(config.user_agent.as_str())
            .map_err(|e| Error::InvalidInput(format!("invalid user agent: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in &config.default_headers {
            let (name, value) = parse_header(name, value)?;
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                api_key,
                base_url,
                config,
            }),
        })
    }

    /// Get the auth stream enrollment service.
    pub fn auth_stream_enrollment(&self) -> AuthStreamEnrollmentService {
        AuthStreamEnrollmentService::new(self.inner.clone())
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Resolve an API path against the base URL, keeping any base path prefix.
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::GET, path, None, options).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, Some(body), options).await
    }

    /// Make a POST request without a body.
    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::POST, path, None, options).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::DELETE, path, None, options).await
    }

    /// Send exactly one request and map the response.
    ///
    /// `options` override the method, timeout, headers and query of this
    /// call only.
    #[instrument(
        name = "lithic_request",
        skip_all,
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
        )
    )]
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<T> {
        let RequestOptions {
            method: method_override,
            timeout,
            headers,
            query,
        } = options;
        let method = method_override.unwrap_or(method);

        let mut url = self.endpoint_url(path)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Span::current().record("http.method", method.as_str());
        Span::current().record("http.url", url.as_str());

        let mut request = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, self.api_key.header_value()?);

        if let Some(ref body) = body {
            request = request.json(body);
        }
        for (name, value) in &headers {
            let (name, value) = parse_header(name, value)?;
            request = request.header(name, value);
        }
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "request failed before a response was received");
                return Err(err.into());
            }
        };

        self.handle_response(response).await
    }

    /// Handle an API response.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if status.is_success() {
            let bytes = response.bytes().await?;
            return match parse_body(&bytes) {
                Ok(parsed) => {
                    debug!(bytes = bytes.len(), "request succeeded");
                    Ok(parsed)
                }
                Err(err) => {
                    warn!(error = %err, "success response body could not be parsed");
                    Err(err)
                }
            };
        }

        let retry_after_secs = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let bytes = response.bytes().await.unwrap_or_default();
        let body = error_body(&bytes);

        warn!(status = status.as_u16(), "request returned an error status");
        Err(Error::from_api_response(status, retry_after_secs, body))
    }
}

/// Parse a success body. An empty body parses as JSON `null`.
fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(Value::Null)?);
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Best-effort decode of an error body; non-JSON text is kept as a string.
fn error_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let header_name = HeaderName::try_from(name)
        .map_err(|e| Error::InvalidInput(format!("invalid header name {:?}: {}", name, e)))?;
    let header_value = HeaderValue::try_from(value)
        .map_err(|e| Error::InvalidInput(format!("invalid header value for {}: {}", name, e)))?;
    Ok((header_name, header_value))
}

impl Clone for LithicClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for LithicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LithicClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> LithicClient {
        LithicClient::with_config("something1234", ClientConfig::new().with_base_url(base_url))
            .unwrap()
    }

    #[test]
    fn test_endpoint_url_keeps_base_path() {
        let prefixed = client("http://127.0.0.1:4010/prefix/");
        let url = prefixed.inner.endpoint_url("/v1/auth_stream").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:4010/prefix/v1/auth_stream");

        let bare = client("http://127.0.0.1:4010");
        let url = bare.inner.endpoint_url("/v1/auth_stream").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:4010/v1/auth_stream");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = LithicClient::with_config(
            "something1234",
            ClientConfig::new().with_base_url("not a url"),
        );
        assert!(matches!(result, Err(Error::UrlParse(_))));

        let result = LithicClient::with_config(
            "something1234",
            ClientConfig::new().with_base_url("mailto:ops@example.com"),
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_user_agent_is_invalid_input() {
        let result = LithicClient::with_config(
            "something1234",
            ClientConfig::new().with_user_agent("bad\nagent"),
        );
        match result {
            Err(err @ Error::InvalidInput(_)) => assert!(!err.is_retryable()),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_base_url_with_query_or_fragment_rejected() {
        for base_url in ["http://127.0.0.1:4010?x=1", "http://127.0.0.1:4010/#top"] {
            let result = LithicClient::with_config(
                "something1234",
                ClientConfig::new().with_base_url(base_url),
            );
            assert!(matches!(result, Err(Error::Config(_))), "{}: {:?}", base_url, result);
        }
    }

    #[test]
    fn test_from_env() {
        // Single test so the environment is never mutated concurrently.
        std::env::remove_var(crate::auth::API_KEY_ENV);
        std::env::remove_var(crate::client::BASE_URL_ENV);
        assert!(matches!(LithicClient::from_env(), Err(Error::Config(_))));

        std::env::set_var(crate::auth::API_KEY_ENV, "something1234");
        let client = LithicClient::from_env().unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.lithic.com/");

        std::env::set_var(crate::client::BASE_URL_ENV, "   ");
        assert_eq!(ClientConfig::from_env().base_url, "https://api.lithic.com");

        std::env::set_var(crate::client::BASE_URL_ENV, "http://127.0.0.1:4010");
        let client = LithicClient::from_env().unwrap();
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:4010/");

        std::env::set_var(crate::auth::API_KEY_ENV, "");
        assert!(matches!(LithicClient::from_env(), Err(Error::Config(_))));

        std::env::remove_var(crate::auth::API_KEY_ENV);
        std::env::remove_var(crate::client::BASE_URL_ENV);
    }

    #[test]
    fn test_invalid_default_header() {
        let result = LithicClient::with_config(
            "something1234",
            ClientConfig::new().with_default_header("bad header", "x"),
        );
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = client("http://127.0.0.1:4010");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("something1234"));
        assert!(debug.contains("127.0.0.1:4010"));
    }

    #[test]
    fn test_debug_hides_default_header_values() {
        let client = LithicClient::with_config(
            "something1234",
            ClientConfig::new().with_default_header("Proxy-Authorization", "proxy-secret"),
        )
        .unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("Proxy-Authorization"));
        assert!(!debug.contains("proxy-secret"));
    }

    #[test]
    fn test_parse_body_empty_is_null() {
        let value: Value = parse_body(b"").unwrap();
        assert_eq!(value, Value::Null);
        let _: () = parse_body(b"  \n").unwrap();
    }

    #[test]
    fn test_error_body_keeps_plain_text() {
        assert_eq!(error_body(b""), Value::Null);
        assert_eq!(
            error_body(b"upstream timeout"),
            Value::String("upstream timeout".to_string())
        );
        assert_eq!(
            error_body(br#"{"message":"x"}"#),
            serde_json::json!({ "message": "x" })
        );
    }
}

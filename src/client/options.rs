//! Per-call request options.

use std::time::Duration;

use reqwest::Method;

/// Transport overrides for a single call.
///
/// Options are a separate type from every resource's parameters, so they
/// can never be confused with request data. They apply to the one call
/// they are passed to and are never stored on the client.
///
/// # Example
///
/// ```
/// use lithic::RequestOptions;
/// use std::time::Duration;
///
/// let options = RequestOptions::new()
///     .with_timeout(Duration::from_secs(5))
///     .with_header("Idempotency-Key", "enroll-2024-01-01");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method override
    pub method: Option<Method>,
    /// Timeout override
    pub timeout: Option<Duration>,
    /// Extra headers, applied over the client's default headers
    pub headers: Vec<(String, String)>,
    /// Extra query parameters
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    /// Create empty options. Equivalent to passing no options at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Send the request with a different HTTP method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Override the client timeout for this call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header for this call.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter for this call.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Returns `true` if these options change nothing.
    pub fn is_empty(&self) -> bool {
        self.method.is_none()
            && self.timeout.is_none()
            && self.headers.is_empty()
            && self.query.is_empty()
    }
}

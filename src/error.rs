//! Error types for the Lithic API client.
//!
//! Every failed call resolves to a single [`Error`]. Responses with a
//! non-2xx status are keyed by status code into their own variant, so
//! callers can `match` on `Error::BadRequest(_)` the same way they would
//! catch a specific exception class in other SDKs.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Lithic operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Details carried by every status-keyed error variant.
#[derive(Debug, Clone)]
pub struct ApiErrorDetails {
    /// HTTP status code
    pub status: u16,
    /// Human-readable error message
    pub message: String,
    /// Request identifier Lithic support can use to trace the call
    pub debugging_request_id: Option<String>,
    /// Raw response body for debugging
    pub body: Value,
}

impl std::fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "status={}, message={}", self.status, self.message)?;
        if let Some(ref id) = self.debugging_request_id {
            write!(f, ", debugging_request_id={}", id)?;
        }
        Ok(())
    }
}

/// The main error type for all Lithic API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// 400: the request was malformed or used an unsupported method
    #[error("Bad request: {0}")]
    BadRequest(ApiErrorDetails),

    /// 401: the API key was missing or rejected
    #[error("Authentication failed: {0}")]
    Authentication(ApiErrorDetails),

    /// 403: the API key lacks access to this resource
    #[error("Permission denied: {0}")]
    PermissionDenied(ApiErrorDetails),

    /// 404
    #[error("Not found: {0}")]
    NotFound(ApiErrorDetails),

    /// 409
    #[error("Conflict: {0}")]
    Conflict(ApiErrorDetails),

    /// 422: the request was well-formed but failed validation
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(ApiErrorDetails),

    /// 429
    #[error("Rate limited (retry after {retry_after_secs:?}s): {details}")]
    RateLimited {
        /// Value of the `Retry-After` header, when the server sent one
        retry_after_secs: Option<u64>,
        /// Response details
        details: ApiErrorDetails,
    },

    /// 5xx
    #[error("Internal server error: {0}")]
    InternalServer(ApiErrorDetails),

    /// Any other non-success status
    #[error("API error: {0}")]
    Api(ApiErrorDetails),

    /// The request never produced a response
    #[error("Connection error: {0}")]
    Connection(#[source] reqwest::Error),

    /// The request exceeded its timeout
    #[error("Request timeout")]
    Timeout,

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Connection(err)
        }
    }
}

impl Error {
    /// The HTTP status of the response that caused this error, if any.
    pub fn status(&self) -> Option<u16> {
        self.details().map(|d| d.status)
    }

    /// Response details for status-keyed variants.
    pub fn details(&self) -> Option<&ApiErrorDetails> {
        match self {
            Error::BadRequest(d)
            | Error::Authentication(d)
            | Error::PermissionDenied(d)
            | Error::NotFound(d)
            | Error::Conflict(d)
            | Error::UnprocessableEntity(d)
            | Error::InternalServer(d)
            | Error::Api(d) => Some(d),
            Error::RateLimited { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Returns `true` if this error is potentially transient.
    ///
    /// The client itself never retries; this is a hint for callers that
    /// want to.
    ///
    /// # Example
    ///
    /// ```
    /// use lithic::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Worth another attempt");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Connection(_) | Error::Timeout | Error::RateLimited { .. } => true,
            Error::Conflict(_) | Error::InternalServer(_) => true,
            Error::Api(d) => d.status == 408,
            _ => false,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_) | Error::PermissionDenied(_))
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => self.status().is_some_and(|s| (400..500).contains(&s)),
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s >= 500)
    }

    /// Create a status-keyed error from a response.
    pub(crate) fn from_api_response(
        status: StatusCode,
        retry_after_secs: Option<u64>,
        body: Value,
    ) -> Self {
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .or_else(|| {
                body.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
            })
            .or_else(|| body.get("error").and_then(|e| e.as_str()))
            .or_else(|| body.as_str())
            .map(String::from)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown API error")
                    .to_string()
            });

        let debugging_request_id = body
            .get("debugging_request_id")
            .and_then(|v| v.as_str())
            .map(String::from);

        let details = ApiErrorDetails {
            status: status.as_u16(),
            message,
            debugging_request_id,
            body,
        };

        match status.as_u16() {
            400 => Error::BadRequest(details),
            401 => Error::Authentication(details),
            403 => Error::PermissionDenied(details),
            404 => Error::NotFound(details),
            409 => Error::Conflict(details),
            422 => Error::UnprocessableEntity(details),
            429 => Error::RateLimited {
                retry_after_secs,
                details,
            },
            s if s >= 500 => Error::InternalServer(details),
            _ => Error::Api(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> StatusCode {
        StatusCode::from_u16(code).unwrap()
    }

    #[test]
    fn test_from_api_response_bad_request() {
        let body = serde_json::json!({
            "debugging_request_id": "ea5f8d8a-0c5b-4c8e-8c6a-2f1f0b0b7a1e",
            "message": "Invalid method"
        });

        match Error::from_api_response(status(400), None, body) {
            Error::BadRequest(details) => {
                assert_eq!(details.status, 400);
                assert_eq!(details.message, "Invalid method");
                assert_eq!(
                    details.debugging_request_id.as_deref(),
                    Some("ea5f8d8a-0c5b-4c8e-8c6a-2f1f0b0b7a1e")
                );
            }
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (401, "Authentication"),
            (403, "PermissionDenied"),
            (404, "NotFound"),
            (409, "Conflict"),
            (422, "UnprocessableEntity"),
            (429, "RateLimited"),
            (500, "InternalServer"),
            (503, "InternalServer"),
            (418, "Api"),
        ];

        for (code, expected) in cases {
            let err = Error::from_api_response(status(code), None, Value::Null);
            let name = format!("{:?}", err);
            assert!(
                name.starts_with(expected),
                "status {} mapped to {}",
                code,
                name
            );
            assert_eq!(err.status(), Some(code));
        }
    }

    #[test]
    fn test_message_fallbacks() {
        let nested = serde_json::json!({ "error": { "message": "nested" } });
        let err = Error::from_api_response(status(400), None, nested);
        assert_eq!(err.details().unwrap().message, "nested");

        let err = Error::from_api_response(status(404), None, Value::Null);
        assert_eq!(err.details().unwrap().message, "Not Found");
    }

    #[test]
    fn test_rate_limited_keeps_retry_after() {
        let err = Error::from_api_response(status(429), Some(7), Value::Null);
        assert!(matches!(
            err,
            Error::RateLimited {
                retry_after_secs: Some(7),
                ..
            }
        ));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_error_classification() {
        let bad = Error::from_api_response(status(400), None, Value::Null);
        assert!(bad.is_client_error());
        assert!(!bad.is_server_error());
        assert!(!bad.is_retryable());

        let auth = Error::from_api_response(status(401), None, Value::Null);
        assert!(auth.is_auth_error());

        let server = Error::from_api_response(status(502), None, Value::Null);
        assert!(server.is_server_error());
        assert!(server.is_retryable());

        assert!(Error::Timeout.is_retryable());
        assert!(Error::InvalidInput("bad".into()).is_client_error());
        assert_eq!(Error::Timeout.status(), None);
    }
}

//! API key handling.

use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Environment variable read by [`ApiKey::from_env`].
pub const API_KEY_ENV: &str = "LITHIC_API_KEY";

/// A Lithic API key.
///
/// The key is held as a [`SecretString`] and never appears in `Debug`
/// output or logs.
///
/// # Example
///
/// ```
/// use lithic::ApiKey;
///
/// let key = ApiKey::new("my-api-key").expect("non-empty key");
/// assert_eq!(format!("{:?}", key), "ApiKey([REDACTED])");
/// ```
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Wrap an API key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the key is empty or only whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::Config("API key must not be empty".to_string()));
        }
        Ok(Self(SecretString::from(key)))
    }

    /// Read the API key from the `LITHIC_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Config(format!("{} is not set", API_KEY_ENV)))?;
        Self::new(key)
    }

    /// Build the `Authorization` header value. Lithic expects the raw key.
    pub(crate) fn header_value(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(self.0.expose_secret())
            .map_err(|_| Error::InvalidInput("Invalid API key format".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

//! Auth stream enrollment models.
//!
//! Auth stream access (ASA) lets a program approve or decline card
//! authorizations in real time: Lithic forwards each authorization to an
//! enrolled webhook URL and waits for the decision.

use serde::{Deserialize, Serialize};

/// Current enrollment status for auth stream access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStreamEnrollment {
    /// Whether ASA is enrolled.
    #[serde(default)]
    pub enrolled: bool,
}

/// Secret used to verify the signature of auth stream webhook requests.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStreamSecret {
    /// The shared HMAC secret, prefixed with `whsec_`.
    #[serde(default)]
    pub secret: Option<String>,
}

impl std::fmt::Debug for AuthStreamSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStreamSecret")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Parameters for enrolling in auth stream access.
///
/// All fields are optional; `AuthStreamEnrollParams::default()` enrolls
/// without changing the webhook URL.
///
/// # Example
///
/// ```
/// use lithic::models::AuthStreamEnrollParams;
///
/// let params = AuthStreamEnrollParams::new()
///     .with_webhook_url("https://example.com/asa");
/// assert_eq!(params.webhook_url.as_deref(), Some("https://example.com/asa"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStreamEnrollParams {
    /// URL Lithic sends authorization requests to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

impl AuthStreamEnrollParams {
    /// Create empty enrollment parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the webhook URL.
    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }
}

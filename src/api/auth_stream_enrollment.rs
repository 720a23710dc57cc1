//! Auth stream enrollment service.

use std::sync::Arc;

use crate::client::{ClientInner, RequestOptions};
use crate::models::{AuthStreamEnrollParams, AuthStreamEnrollment, AuthStreamSecret};
use crate::Result;

const AUTH_STREAM_PATH: &str = "/v1/auth_stream";
const SECRET_PATH: &str = "/v1/auth_stream/secret";
const ROTATE_SECRET_PATH: &str = "/v1/auth_stream/secret/rotate";

/// Service for auth stream access (ASA) enrollment.
///
/// Every operation has a plain form and a `_with_options` form taking
/// [`RequestOptions`]. Both send exactly one request.
///
/// # Example
///
/// ```no_run
/// use lithic::models::AuthStreamEnrollParams;
///
/// # async fn example(client: lithic::LithicClient) -> lithic::Result<()> {
/// let service = client.auth_stream_enrollment();
///
/// if !service.retrieve().await?.enrolled {
///     service
///         .enroll(AuthStreamEnrollParams::new().with_webhook_url("https://example.com/asa"))
///         .await?;
/// }
///
/// let secret = service.retrieve_secret().await?;
/// # Ok(())
/// # }
/// ```
pub struct AuthStreamEnrollmentService {
    inner: Arc<ClientInner>,
}

impl AuthStreamEnrollmentService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Check whether ASA is enrolled.
    pub async fn retrieve(&self) -> Result<AuthStreamEnrollment> {
        self.retrieve_with_options(RequestOptions::default()).await
    }

    /// [`retrieve`](Self::retrieve) with per-call options.
    pub async fn retrieve_with_options(
        &self,
        options: RequestOptions,
    ) -> Result<AuthStreamEnrollment> {
        self.inner.get(AUTH_STREAM_PATH, options).await
    }

    /// Disenroll ASA. Authorizations are no longer forwarded to the webhook.
    pub async fn disenroll(&self) -> Result<()> {
        self.disenroll_with_options(RequestOptions::default()).await
    }

    /// [`disenroll`](Self::disenroll) with per-call options.
    pub async fn disenroll_with_options(&self, options: RequestOptions) -> Result<()> {
        let _: serde_json::Value = self.inner.delete(AUTH_STREAM_PATH, options).await?;
        Ok(())
    }

    /// Enroll in ASA.
    ///
    /// Lithic confirms the webhook by calling it before enrollment takes
    /// effect, so the URL must be reachable from Lithic.
    pub async fn enroll(&self, params: AuthStreamEnrollParams) -> Result<()> {
        self.enroll_with_options(params, RequestOptions::default())
            .await
    }

    /// [`enroll`](Self::enroll) with per-call options.
    ///
    /// `params` are sent as the JSON body; `options` only affect transport.
    pub async fn enroll_with_options(
        &self,
        params: AuthStreamEnrollParams,
        options: RequestOptions,
    ) -> Result<()> {
        let _: serde_json::Value = self.inner.post(AUTH_STREAM_PATH, &params, options).await?;
        Ok(())
    }

    /// Get the secret used to verify ASA webhook signatures.
    pub async fn retrieve_secret(&self) -> Result<AuthStreamSecret> {
        self.retrieve_secret_with_options(RequestOptions::default())
            .await
    }

    /// [`retrieve_secret`](Self::retrieve_secret) with per-call options.
    pub async fn retrieve_secret_with_options(
        &self,
        options: RequestOptions,
    ) -> Result<AuthStreamSecret> {
        self.inner.get(SECRET_PATH, options).await
    }

    /// Generate a new ASA webhook secret.
    ///
    /// The previous secret stays valid for 24 hours.
    pub async fn rotate_secret(&self) -> Result<()> {
        self.rotate_secret_with_options(RequestOptions::default())
            .await
    }

    /// [`rotate_secret`](Self::rotate_secret) with per-call options.
    pub async fn rotate_secret_with_options(&self, options: RequestOptions) -> Result<()> {
        let _: serde_json::Value = self.inner.post_empty(ROTATE_SECRET_PATH, options).await?;
        Ok(())
    }
}

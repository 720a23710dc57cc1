//! # lithic-rs
//!
//! An async Rust client for the Lithic card issuing API.
//!
//! This crate covers auth stream access (ASA) enrollment: checking,
//! enrolling and disenrolling the webhook Lithic forwards card
//! authorizations to, and managing the secret that signs those webhooks.
//!
//! ## Features
//!
//! - **One request per call**: every operation maps to a single HTTP round trip
//! - **Per-call options**: override method, timeout, headers or query for one call
//! - **Typed errors**: non-2xx responses map to status-keyed [`Error`] variants
//! - **Tracing**: each request runs in a `lithic_request` span
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lithic::{ClientConfig, Environment, LithicClient};
//! use lithic::models::AuthStreamEnrollParams;
//!
//! #[tokio::main]
//! async fn main() -> lithic::Result<()> {
//!     let client = LithicClient::with_config(
//!         std::env::var("LITHIC_API_KEY").unwrap_or_default(),
//!         ClientConfig::default().with_environment(Environment::Sandbox),
//!     )?;
//!
//!     let asa = client.auth_stream_enrollment();
//!     if !asa.retrieve().await?.enrolled {
//!         asa.enroll(
//!             AuthStreamEnrollParams::new().with_webhook_url("https://example.com/asa"),
//!         )
//!         .await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Request Options
//!
//! Parameters and options are separate types, so options can be passed
//! with or without parameters:
//!
//! ```rust,no_run
//! use lithic::{Error, LithicClient, Method, RequestOptions};
//! use lithic::models::AuthStreamEnrollParams;
//!
//! # async fn example(client: LithicClient) -> lithic::Result<()> {
//! let options = RequestOptions::new().with_method(Method::PUT);
//! match client
//!     .auth_stream_enrollment()
//!     .enroll_with_options(AuthStreamEnrollParams::default(), options)
//!     .await
//! {
//!     Err(Error::BadRequest(details)) => println!("rejected: {}", details.message),
//!     other => other?,
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::ApiKey;
pub use client::{ClientConfig, LithicClient, RequestOptions};
pub use error::{ApiErrorDetails, Error, Result};
pub use models::Environment;
pub use reqwest::Method;

/// Prelude module for convenient imports.
///
/// ```rust
/// use lithic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::AuthStreamEnrollmentService;
    pub use crate::auth::ApiKey;
    pub use crate::client::{ClientConfig, LithicClient, RequestOptions};
    pub use crate::error::{ApiErrorDetails, Error, Result};
    pub use crate::models::{
        AuthStreamEnrollParams, AuthStreamEnrollment, AuthStreamSecret, Environment,
    };
    pub use reqwest::Method;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults_to_production() {
        let client = LithicClient::new("something1234").unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.lithic.com/");
    }

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(matches!(LithicClient::new(""), Err(Error::Config(_))));
    }

    #[test]
    fn test_clone_shares_config() {
        let client = LithicClient::with_config(
            "something1234",
            ClientConfig::new().with_environment(Environment::Sandbox),
        )
        .unwrap();
        let clone = client.clone();
        assert_eq!(clone.base_url(), client.base_url());
        assert_eq!(clone.config().base_url, "https://sandbox.lithic.com");
    }
}

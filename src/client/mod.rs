//! HTTP client and request plumbing for the Lithic API.
//!
//! This module provides the main entry point [`LithicClient`], its
//! [`ClientConfig`], and the per-call [`RequestOptions`].
//!
//! # Example
//!
//! ```no_run
//! use lithic::{ClientConfig, LithicClient};
//!
//! # async fn example() -> lithic::Result<()> {
//! let client = LithicClient::with_config(
//!     "something1234",
//!     ClientConfig::default().with_base_url("http://127.0.0.1:4010"),
//! )?;
//!
//! let enrollment = client.auth_stream_enrollment().retrieve().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod options;

pub use config::{ClientConfig, BASE_URL_ENV};
pub use http::LithicClient;
pub use options::RequestOptions;
pub(crate) use http::ClientInner;

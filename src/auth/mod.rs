//! Authentication for the Lithic API.
//!
//! Lithic authenticates every request with an API key sent verbatim in the
//! `Authorization` header. Keys are issued per environment, so a sandbox
//! key will be rejected by production and vice versa.
//!
//! ```no_run
//! use lithic::ApiKey;
//!
//! # fn example() -> lithic::Result<()> {
//! let key = ApiKey::from_env()?;
//! # Ok(())
//! # }
//! ```

mod api_key;

pub use api_key::{ApiKey, API_KEY_ENV};

//! Data models for the Lithic API.
//!
//! - [`primitives`] - Core types like `Environment`
//! - [`auth_stream`] - Auth stream enrollment models

pub mod primitives;
pub mod auth_stream;

// Re-export commonly used types
pub use primitives::*;
pub use auth_stream::*;

//! API service modules for Lithic endpoints.
//!
//! Each service groups the operations of one API resource.

mod auth_stream_enrollment;

pub use auth_stream_enrollment::AuthStreamEnrollmentService;

//! Signed URL Service
//!
//! HTTP viewer for private S3 content delivered through CloudFront.
//! Lists the configured bucket and issues time-limited CloudFront signed
//! URLs, with the signing key fetched from AWS Secrets Manager per request.

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;
pub mod views;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};

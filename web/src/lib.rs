//! Shared Axum HTTP plumbing for the workshop backend.
//!
//! This crate holds the pieces of the HTTP layer that are independent of the
//! workshop domain:
//!
//! - [`AppError`]: bridges domain failures to JSON error responses
//! - [`extractors`]: small request extractors (client IP)
//!
//! # Error responses
//!
//! Every error serializes as `{"error": "<message>"}`. Server-side failures
//! carry an internal source error that is logged but never exposed to the
//! client.
//!
//! # Example
//!
//! ```ignore
//! use workshop_web::{AppError, WebResult};
//! use axum::Json;
//!
//! async fn handler() -> WebResult<Json<Data>> {
//!     let record = fetch_record().await.map_err(|e| {
//!         AppError::internal("Failed to fetch record").with_source(e.into())
//!     })?;
//!     Ok(Json(record))
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::ClientIp;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;

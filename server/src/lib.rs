//! REST backend for the workshop web application.
//!
//! Attendee registration, speaker listings, session scheduling, and an admin
//! dashboard behind password-based authentication. All persistence goes
//! through the [`providers::Repository`] seam, backed by a document store in
//! production and an in-memory mock in tests.
//!
//! # Architecture
//!
//! ```text
//! HTTP request
//!   └─ router (server::routes)
//!        ├─ auth gate (auth::middleware::RequireAdmin, signed cookie)
//!        ├─ handlers (api::*, auth::handlers)
//!        └─ Repository (providers) ──> Redis document store (stores)
//! ```
//!
//! Handlers are generic over the repository so integration tests can drive
//! the real router against [`mocks::MockRepository`].

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod server;
pub mod stats;
pub mod stores;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

// Re-export key types for convenience
pub use config::Config;
pub use server::{AppState, build_router};

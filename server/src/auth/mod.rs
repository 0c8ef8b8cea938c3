//! Admin authentication: session cookie and route gate.
//!
//! A single operator-configured password guards the admin surface. A
//! successful login marks the caller's session as authorized; the flag
//! travels in a signed cookie and is checked by the [`middleware::RequireAdmin`]
//! extractor before any protected handler runs. The server keeps no session
//! state of its own.

pub mod handlers;
pub mod middleware;
pub mod session;

pub use middleware::RequireAdmin;
pub use session::{SESSION_COOKIE, SessionData, signing_key};

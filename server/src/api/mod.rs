//! HTTP handlers for the workshop API.
//!
//! Public surface: attendee registration and count, speaker and session
//! listings. Admin surface (behind [`crate::auth::RequireAdmin`]): attendee
//! listing and deletion, speaker and session management, dashboard stats.

pub mod admin;
pub mod attendees;
pub mod sessions;
pub mod speakers;

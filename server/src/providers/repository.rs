//! Document store trait.

use crate::error::StoreResult;
use crate::models::{Attendee, DesignationCount, Session, Speaker};
use std::future::Future;

/// Document store operations, one group per collection.
///
/// This trait abstracts over the document database. Handlers are generic
/// over it so the same router runs against the Redis adapter in production
/// and the in-memory mock in tests.
///
/// # Implementation Notes
///
/// - Identities are assigned by the store on creation and are unique
///   within a collection.
/// - Bulk reads skip (and log) records that fail to parse; a single bad
///   document never fails a scan.
/// - Deletes are idempotent: deleting a missing id is indistinguishable
///   from deleting an existing one.
pub trait Repository: Send + Sync {
    /// Persist a new attendee.
    ///
    /// The store assigns the identity; any incoming `id` is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn create_attendee(
        &self,
        attendee: Attendee,
    ) -> impl Future<Output = StoreResult<Attendee>> + Send;

    /// Fetch all attendees, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan fails.
    fn all_attendees(&self) -> impl Future<Output = StoreResult<Vec<Attendee>>> + Send;

    /// Count attendees without transferring the documents.
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails.
    fn attendee_count(&self) -> impl Future<Output = StoreResult<usize>> + Send;

    /// Delete an attendee by id. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails; a missing id is not an error.
    fn delete_attendee(&self, id: &str) -> impl Future<Output = StoreResult<()>> + Send;

    /// Persist a new speaker. The store assigns the identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn create_speaker(&self, speaker: Speaker)
    -> impl Future<Output = StoreResult<Speaker>> + Send;

    /// Fetch all speakers. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan fails.
    fn all_speakers(&self) -> impl Future<Output = StoreResult<Vec<Speaker>>> + Send;

    /// Fetch one speaker by id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::NotFound`] if absent.
    fn speaker(&self, id: &str) -> impl Future<Output = StoreResult<Speaker>> + Send;

    /// Update a stored speaker applying the partial-overwrite policy
    /// ([`Speaker::apply_update`]).
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::NotFound`] if the speaker does
    /// not exist.
    fn update_speaker(
        &self,
        id: &str,
        update: Speaker,
    ) -> impl Future<Output = StoreResult<()>> + Send;

    /// Delete a speaker by id. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails; a missing id is not an error.
    fn delete_speaker(&self, id: &str) -> impl Future<Output = StoreResult<()>> + Send;

    /// Persist a new session. The store assigns the identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn create_session(&self, session: Session)
    -> impl Future<Output = StoreResult<Session>> + Send;

    /// Fetch all sessions. Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan fails.
    fn all_sessions(&self) -> impl Future<Output = StoreResult<Vec<Session>>> + Send;

    /// Fetch one session by id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::StoreError::NotFound`] if absent.
    fn session(&self, id: &str) -> impl Future<Output = StoreResult<Session>> + Send;

    /// Overwrite a stored session with the full incoming record, empty
    /// fields included. Writes the record even when the id was absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn update_session(
        &self,
        id: &str,
        session: Session,
    ) -> impl Future<Output = StoreResult<()>> + Send;

    /// Delete a session by id. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails; a missing id is not an error.
    fn delete_session(&self, id: &str) -> impl Future<Output = StoreResult<()>> + Send;

    /// Scan all attendees and count them by exact designation string.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan fails.
    fn designation_breakdown(
        &self,
    ) -> impl Future<Output = StoreResult<Vec<DesignationCount>>> + Send;
}

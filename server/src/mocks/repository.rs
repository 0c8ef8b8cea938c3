//! Mock document store for testing.

use crate::error::{StoreError, StoreResult};
use crate::models::{Attendee, DesignationCount, Session, Speaker};
use crate::providers::Repository;
use crate::stats;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory collections guarded by one lock.
#[derive(Debug, Default)]
struct Collections {
    attendees: HashMap<String, Attendee>,
    speakers: HashMap<String, Speaker>,
    sessions: HashMap<String, Session>,
}

/// Mock document store.
///
/// Uses in-memory storage and mirrors the adapter contract: store-assigned
/// ids, idempotent deletes, newest-first attendee listing, speaker
/// partial-update semantics.
///
/// Clones share the same underlying collections, so a test can keep one
/// handle for seeding while the router owns another.
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    collections: Arc<Mutex<Collections>>,
    fail_speakers: Arc<AtomicBool>,
}

impl MockRepository {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent speaker scan fail with a backend error.
    ///
    /// Used to exercise the session-listing denormalization fallback.
    pub fn fail_speaker_scans(&self, fail: bool) {
        self.fail_speakers.store(fail, Ordering::SeqCst);
    }

    /// Insert an attendee as-is, keeping its id and timestamp (for seeding
    /// tests with known data).
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    pub fn seed_attendee(&self, attendee: Attendee) {
        #[allow(clippy::unwrap_used)]
        let mut collections = self.collections.lock().unwrap();
        collections
            .attendees
            .insert(attendee.id.clone(), attendee);
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Collections>> {
        self.collections
            .lock()
            .map_err(|_| StoreError::Backend("Mutex lock failed".to_string()))
    }
}

impl Repository for MockRepository {
    fn create_attendee(
        &self,
        mut attendee: Attendee,
    ) -> impl Future<Output = StoreResult<Attendee>> + Send {
        let result = self.lock().map(|mut collections| {
            attendee.id = Uuid::new_v4().to_string();
            collections
                .attendees
                .insert(attendee.id.clone(), attendee.clone());
            attendee
        });
        async move { result }
    }

    fn all_attendees(&self) -> impl Future<Output = StoreResult<Vec<Attendee>>> + Send {
        let result = self.lock().map(|collections| {
            let mut attendees: Vec<Attendee> = collections.attendees.values().cloned().collect();
            attendees.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            attendees
        });
        async move { result }
    }

    fn attendee_count(&self) -> impl Future<Output = StoreResult<usize>> + Send {
        let result = self.lock().map(|collections| collections.attendees.len());
        async move { result }
    }

    fn delete_attendee(&self, id: &str) -> impl Future<Output = StoreResult<()>> + Send {
        let result = self.lock().map(|mut collections| {
            collections.attendees.remove(id);
        });
        async move { result }
    }

    fn create_speaker(
        &self,
        mut speaker: Speaker,
    ) -> impl Future<Output = StoreResult<Speaker>> + Send {
        let result = self.lock().map(|mut collections| {
            speaker.id = Uuid::new_v4().to_string();
            collections
                .speakers
                .insert(speaker.id.clone(), speaker.clone());
            speaker
        });
        async move { result }
    }

    fn all_speakers(&self) -> impl Future<Output = StoreResult<Vec<Speaker>>> + Send {
        let result = if self.fail_speakers.load(Ordering::SeqCst) {
            Err(StoreError::Backend("speaker scan failed".to_string()))
        } else {
            self.lock()
                .map(|collections| collections.speakers.values().cloned().collect())
        };
        async move { result }
    }

    fn speaker(&self, id: &str) -> impl Future<Output = StoreResult<Speaker>> + Send {
        let result = self.lock().and_then(|collections| {
            collections.speakers.get(id).cloned().ok_or(StoreError::NotFound)
        });
        async move { result }
    }

    fn update_speaker(
        &self,
        id: &str,
        update: Speaker,
    ) -> impl Future<Output = StoreResult<()>> + Send {
        let result = self.lock().and_then(|mut collections| {
            let stored = collections
                .speakers
                .get_mut(id)
                .ok_or(StoreError::NotFound)?;
            stored.apply_update(update);
            Ok(())
        });
        async move { result }
    }

    fn delete_speaker(&self, id: &str) -> impl Future<Output = StoreResult<()>> + Send {
        let result = self.lock().map(|mut collections| {
            collections.speakers.remove(id);
        });
        async move { result }
    }

    fn create_session(
        &self,
        mut session: Session,
    ) -> impl Future<Output = StoreResult<Session>> + Send {
        let result = self.lock().map(|mut collections| {
            session.id = Uuid::new_v4().to_string();
            collections
                .sessions
                .insert(session.id.clone(), session.clone());
            session
        });
        async move { result }
    }

    fn all_sessions(&self) -> impl Future<Output = StoreResult<Vec<Session>>> + Send {
        let result = self
            .lock()
            .map(|collections| collections.sessions.values().cloned().collect());
        async move { result }
    }

    fn session(&self, id: &str) -> impl Future<Output = StoreResult<Session>> + Send {
        let result = self.lock().and_then(|collections| {
            collections.sessions.get(id).cloned().ok_or(StoreError::NotFound)
        });
        async move { result }
    }

    fn update_session(
        &self,
        id: &str,
        mut session: Session,
    ) -> impl Future<Output = StoreResult<()>> + Send {
        let result = self.lock().map(|mut collections| {
            session.id = id.to_string();
            collections.sessions.insert(id.to_string(), session);
        });
        async move { result }
    }

    fn delete_session(&self, id: &str) -> impl Future<Output = StoreResult<()>> + Send {
        let result = self.lock().map(|mut collections| {
            collections.sessions.remove(id);
        });
        async move { result }
    }

    fn designation_breakdown(
        &self,
    ) -> impl Future<Output = StoreResult<Vec<DesignationCount>>> + Send {
        let result = self.lock().map(|collections| {
            let attendees: Vec<Attendee> = collections.attendees.values().cloned().collect();
            stats::count_by_designation(&attendees)
        });
        async move { result }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn attendee(name: &str, designation: &str) -> Attendee {
        Attendee {
            id: String::new(),
            name: name.to_string(),
            email: format!("{name}@example.com"),
            designation: designation.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let repo = MockRepository::new();
        let created = repo
            .create_attendee(attendee("grace", "Engineer"))
            .await
            .unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(repo.attendee_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_attendees_listed_newest_first() {
        let repo = MockRepository::new();
        let now = Utc::now();
        for (name, age_minutes) in [("old", 30), ("new", 0), ("middle", 10)] {
            repo.seed_attendee(Attendee {
                id: name.to_string(),
                created_at: now - Duration::minutes(age_minutes),
                ..attendee(name, "Engineer")
            });
        }

        let listed = repo.all_attendees().await.unwrap();
        let names: Vec<&str> = listed.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["new", "middle", "old"]);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = MockRepository::new();
        repo.delete_attendee("missing").await.unwrap();
    }

    #[tokio::test]
    async fn test_speaker_scan_failure_toggle() {
        let repo = MockRepository::new();
        repo.fail_speaker_scans(true);
        assert!(repo.all_speakers().await.is_err());

        repo.fail_speaker_scans(false);
        assert!(repo.all_speakers().await.is_ok());
    }

    #[tokio::test]
    async fn test_update_missing_speaker_is_not_found() {
        let repo = MockRepository::new();
        let result = repo.update_speaker("missing", Speaker::default()).await;
        assert_eq!(result, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_session_update_overwrites_and_upserts() {
        let repo = MockRepository::new();
        let created = repo
            .create_session(Session {
                title: "Intro".to_string(),
                description: "Overview".to_string(),
                ..Session::default()
            })
            .await
            .unwrap();

        repo.update_session(
            &created.id,
            Session {
                title: "Intro".to_string(),
                ..Session::default()
            },
        )
        .await
        .unwrap();

        let stored = repo.session(&created.id).await.unwrap();
        assert_eq!(stored.description, "");

        // Upsert on unknown id
        repo.update_session("brand-new", Session::default())
            .await
            .unwrap();
        assert!(repo.session("brand-new").await.is_ok());
    }
}

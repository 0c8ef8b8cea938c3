//! Redis-backed document store adapter.
//!
//! Each entity lives as one JSON document:
//! - **Document key**: `{namespace}:{collection}:{id}` → JSON payload
//! - **Index key**: `{namespace}:{collection}` (Set) → member ids
//!
//! The namespace isolates one workshop's collections so several workshops
//! can share a Redis instance. Writes pipeline the document `SET` with the
//! index `SADD`/`SREM` so a document never exists without its index entry.
//!
//! # Example
//!
//! ```no_run
//! use workshop_server::stores::RedisRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = RedisRepository::connect("redis://127.0.0.1:6379", "spring-2025").await?;
//! # Ok(())
//! # }
//! ```

use crate::error::{StoreError, StoreResult};
use crate::models::{Attendee, DesignationCount, Session, Speaker};
use crate::providers::Repository;
use crate::stats;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

const ATTENDEES: &str = "attendees";
const SPEAKERS: &str = "speakers";
const SESSIONS: &str = "sessions";

/// Redis-backed document store.
///
/// Uses `ConnectionManager` for connection pooling and reconnects.
#[derive(Clone)]
pub struct RedisRepository {
    conn_manager: ConnectionManager,
    namespace: String,
}

impl RedisRepository {
    /// Connect to Redis and build a repository for one workshop namespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection to Redis fails.
    pub async fn connect(redis_url: &str, namespace: impl Into<String>) -> StoreResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| StoreError::Backend(format!("Failed to create Redis client: {e}")))?;

        let conn_manager = ConnectionManager::new(client).await.map_err(|e| {
            StoreError::Backend(format!("Failed to create Redis connection manager: {e}"))
        })?;

        Ok(Self {
            conn_manager,
            namespace: namespace.into(),
        })
    }

    /// Key of one document.
    fn doc_key(&self, collection: &str, id: &str) -> String {
        format!("{}:{collection}:{id}", self.namespace)
    }

    /// Key of a collection's id set.
    fn index_key(&self, collection: &str) -> String {
        format!("{}:{collection}", self.namespace)
    }

    /// Write a document and register it in the collection index.
    async fn insert_doc<T: Serialize + Sync>(
        &self,
        collection: &str,
        id: &str,
        doc: &T,
    ) -> StoreResult<()> {
        let payload =
            serde_json::to_string(doc).map_err(|e| StoreError::Serialization(e.to_string()))?;

        let mut conn = self.conn_manager.clone();
        let () = redis::pipe()
            .atomic()
            .set(self.doc_key(collection, id), payload)
            .sadd(self.index_key(collection), id)
            .query_async(&mut conn)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to write document: {e}")))?;

        Ok(())
    }

    /// Fetch one document, or `NotFound`.
    async fn fetch_doc<T: DeserializeOwned>(&self, collection: &str, id: &str) -> StoreResult<T> {
        let mut conn = self.conn_manager.clone();
        let payload: Option<String> = conn
            .get(self.doc_key(collection, id))
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to read document: {e}")))?;

        match payload {
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| StoreError::Serialization(e.to_string()))
            }
            None => Err(StoreError::NotFound),
        }
    }

    /// Full-collection scan.
    ///
    /// Documents that fail to parse are logged and skipped, never fatal to
    /// the scan. Ids whose document vanished between the index read and the
    /// bulk get are skipped the same way.
    async fn scan_docs<T: DeserializeOwned>(&self, collection: &str) -> StoreResult<Vec<T>> {
        let mut conn = self.conn_manager.clone();
        let ids: Vec<String> = conn
            .smembers(self.index_key(collection))
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to read collection index: {e}")))?;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<String> = ids.iter().map(|id| self.doc_key(collection, id)).collect();
        let payloads: Vec<Option<String>> = conn
            .mget(&keys)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to read documents: {e}")))?;

        let mut docs = Vec::with_capacity(payloads.len());
        for (id, payload) in ids.iter().zip(payloads) {
            let Some(json) = payload else { continue };
            match serde_json::from_str(&json) {
                Ok(doc) => docs.push(doc),
                Err(error) => {
                    tracing::warn!(
                        collection,
                        id = %id,
                        error = %error,
                        "Skipping document that failed to parse"
                    );
                }
            }
        }

        Ok(docs)
    }

    /// Delete a document and its index entry. Idempotent.
    async fn remove_doc(&self, collection: &str, id: &str) -> StoreResult<()> {
        let mut conn = self.conn_manager.clone();
        let () = redis::pipe()
            .atomic()
            .del(self.doc_key(collection, id))
            .srem(self.index_key(collection), id)
            .query_async(&mut conn)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to delete document: {e}")))?;

        Ok(())
    }

    /// Collection cardinality via the index set, without fetching documents.
    async fn count_docs(&self, collection: &str) -> StoreResult<usize> {
        let mut conn = self.conn_manager.clone();
        conn.scard(self.index_key(collection))
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to count collection: {e}")))
    }
}

impl Repository for RedisRepository {
    async fn create_attendee(&self, mut attendee: Attendee) -> StoreResult<Attendee> {
        attendee.id = Uuid::new_v4().to_string();
        self.insert_doc(ATTENDEES, &attendee.id, &attendee).await?;

        tracing::debug!(id = %attendee.id, "Created attendee");
        Ok(attendee)
    }

    async fn all_attendees(&self) -> StoreResult<Vec<Attendee>> {
        let mut attendees: Vec<Attendee> = self.scan_docs(ATTENDEES).await?;
        // Newest first; Redis has no ordered fetch for this layout, so the
        // adapter applies the ordering itself.
        attendees.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(attendees)
    }

    async fn attendee_count(&self) -> StoreResult<usize> {
        self.count_docs(ATTENDEES).await
    }

    async fn delete_attendee(&self, id: &str) -> StoreResult<()> {
        self.remove_doc(ATTENDEES, id).await
    }

    async fn create_speaker(&self, mut speaker: Speaker) -> StoreResult<Speaker> {
        speaker.id = Uuid::new_v4().to_string();
        self.insert_doc(SPEAKERS, &speaker.id, &speaker).await?;

        tracing::debug!(id = %speaker.id, "Created speaker");
        Ok(speaker)
    }

    async fn all_speakers(&self) -> StoreResult<Vec<Speaker>> {
        self.scan_docs(SPEAKERS).await
    }

    async fn speaker(&self, id: &str) -> StoreResult<Speaker> {
        self.fetch_doc(SPEAKERS, id).await
    }

    async fn update_speaker(&self, id: &str, update: Speaker) -> StoreResult<()> {
        let mut stored: Speaker = self.fetch_doc(SPEAKERS, id).await?;
        stored.apply_update(update);
        self.insert_doc(SPEAKERS, id, &stored).await
    }

    async fn delete_speaker(&self, id: &str) -> StoreResult<()> {
        self.remove_doc(SPEAKERS, id).await
    }

    async fn create_session(&self, mut session: Session) -> StoreResult<Session> {
        session.id = Uuid::new_v4().to_string();
        self.insert_doc(SESSIONS, &session.id, &session).await?;

        tracing::debug!(id = %session.id, "Created session");
        Ok(session)
    }

    async fn all_sessions(&self) -> StoreResult<Vec<Session>> {
        self.scan_docs(SESSIONS).await
    }

    async fn session(&self, id: &str) -> StoreResult<Session> {
        self.fetch_doc(SESSIONS, id).await
    }

    async fn update_session(&self, id: &str, mut session: Session) -> StoreResult<()> {
        // Full-record overwrite, empty fields included; writes even when
        // the id was absent (upsert), unlike the speaker partial update.
        session.id = id.to_string();
        self.insert_doc(SESSIONS, id, &session).await
    }

    async fn delete_session(&self, id: &str) -> StoreResult<()> {
        self.remove_doc(SESSIONS, id).await
    }

    async fn designation_breakdown(&self) -> StoreResult<Vec<DesignationCount>> {
        let attendees: Vec<Attendee> = self.scan_docs(ATTENDEES).await?;
        Ok(stats::count_by_designation(&attendees))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::Utc;

    // These tests require a running Redis instance
    // Run with: docker run -d -p 6379:6379 redis:7-alpine

    fn test_namespace() -> String {
        format!("test-{}", Uuid::new_v4())
    }

    #[tokio::test]
    #[ignore] // Requires Redis running
    async fn test_attendee_lifecycle() {
        let repo = RedisRepository::connect("redis://127.0.0.1:6379", test_namespace())
            .await
            .unwrap();

        let created = repo
            .create_attendee(Attendee {
                id: String::new(),
                name: "Grace".to_string(),
                email: "grace@example.com".to_string(),
                designation: "Engineer".to_string(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();
        assert!(!created.id.is_empty());

        assert_eq!(repo.attendee_count().await.unwrap(), 1);

        let all = repo.all_attendees().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].email, "grace@example.com");

        repo.delete_attendee(&created.id).await.unwrap();
        assert_eq!(repo.attendee_count().await.unwrap(), 0);

        // Deleting again is not an error
        repo.delete_attendee(&created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires Redis running
    async fn test_speaker_partial_update_in_store() {
        let repo = RedisRepository::connect("redis://127.0.0.1:6379", test_namespace())
            .await
            .unwrap();

        let created = repo
            .create_speaker(Speaker {
                name: "Ada".to_string(),
                avatar: "a.jpg".to_string(),
                ..Speaker::default()
            })
            .await
            .unwrap();

        repo.update_speaker(
            &created.id,
            Speaker {
                name: "Ada Lovelace".to_string(),
                ..Speaker::default()
            },
        )
        .await
        .unwrap();

        let stored = repo.speaker(&created.id).await.unwrap();
        assert_eq!(stored.name, "Ada Lovelace");
        assert_eq!(stored.avatar, "a.jpg");

        repo.delete_speaker(&created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires Redis running
    async fn test_update_missing_speaker_is_not_found() {
        let repo = RedisRepository::connect("redis://127.0.0.1:6379", test_namespace())
            .await
            .unwrap();

        let result = repo.update_speaker("missing", Speaker::default()).await;
        assert_eq!(result, Err(StoreError::NotFound));
    }
}

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use crate::models::assessment::AssessmentRecord;

/// Repository trait for per-session assessment records
#[async_trait]
pub trait SessionRepositoryTrait {
    /// Record an assessment, replacing any prior record for the same
    /// condition within the session
    async fn record(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;

    /// Get all assessment records for a session
    async fn get_session(&self, session_id: Uuid) -> Result<Vec<AssessmentRecord>, RepositoryError>;

    /// Remove all assessment records for a session
    async fn clear_session(&self, session_id: Uuid) -> Result<(), RepositoryError>;

    /// Check that the underlying store is reachable
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Repository for session assessment records.
/// Session state is in-memory by design; nothing outlives the process.
#[derive(Debug, Clone, Default)]
pub struct SessionRepository {
    storage: InMemoryStorage,
}

impl SessionRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }
}

#[async_trait]
impl SessionRepositoryTrait for SessionRepository {
    async fn record(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        debug!(
            "Recording {} assessment for session {}",
            record.condition, record.session_id
        );
        self.storage.store_record(&record).await
    }

    async fn get_session(&self, session_id: Uuid) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        self.storage.get_session(session_id).await
    }

    async fn clear_session(&self, session_id: Uuid) -> Result<(), RepositoryError> {
        debug!("Clearing session {}", session_id);
        self.storage.clear_session(session_id).await
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.storage.session_count().await.map(|_| ())
    }
}

// Mock repository, available to dependent crates via the `mock` feature
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock implementation of SessionRepository for testing
    #[derive(Debug, Default)]
    pub struct MockSessionRepository {
        records: Mutex<HashMap<Uuid, HashMap<String, AssessmentRecord>>>,
    }

    impl MockSessionRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a mock repository with predefined records
        pub fn with_records(records: Vec<AssessmentRecord>) -> Self {
            let repo = Self::new();
            {
                let mut store = repo.records.lock().expect("mock lock");
                for record in records {
                    store
                        .entry(record.session_id)
                        .or_default()
                        .insert(record.condition.clone(), record);
                }
            }
            repo
        }
    }

    #[async_trait]
    impl SessionRepositoryTrait for MockSessionRepository {
        async fn record(
            &self,
            record: AssessmentRecord,
        ) -> Result<AssessmentRecord, RepositoryError> {
            let mut store = self.records.lock()?;
            store
                .entry(record.session_id)
                .or_default()
                .insert(record.condition.clone(), record.clone());
            Ok(record)
        }

        async fn get_session(
            &self,
            session_id: Uuid,
        ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
            let store = self.records.lock()?;
            Ok(store
                .get(&session_id)
                .map(|session| session.values().cloned().collect())
                .unwrap_or_default())
        }

        async fn clear_session(&self, session_id: Uuid) -> Result<(), RepositoryError> {
            let mut store = self.records.lock()?;
            store.remove(&session_id);
            Ok(())
        }

        async fn ping(&self) -> Result<(), RepositoryError> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod repository_tests {
    use super::*;
    use chrono::Utc;

    fn record(session_id: Uuid, condition: &str, tier: &str) -> AssessmentRecord {
        AssessmentRecord {
            session_id,
            condition: condition.to_string(),
            tier: tier.to_string(),
            score: 12.5,
            recorded_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_record_and_get_session() {
        let repo = SessionRepository::new();
        let session_id = Uuid::new_v4();

        repo.record(record(session_id, "Cardiovascular", "Moderate"))
            .await
            .unwrap();
        repo.record(record(session_id, "Asthma", "Low"))
            .await
            .unwrap();

        let records = repo.get_session(session_id).await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_reassessing_replaces_prior_record() {
        let repo = SessionRepository::new();
        let session_id = Uuid::new_v4();

        repo.record(record(session_id, "Diabetes", "Low"))
            .await
            .unwrap();
        repo.record(record(session_id, "Diabetes", "High"))
            .await
            .unwrap();

        let records = repo.get_session(session_id).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tier, "High");
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let repo = SessionRepository::new();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        repo.record(record(first, "COPD", "Moderate")).await.unwrap();

        let records = repo.get_session(second).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_clear_session() {
        let repo = SessionRepository::new();
        let session_id = Uuid::new_v4();

        repo.record(record(session_id, "Asthma", "High"))
            .await
            .unwrap();
        repo.clear_session(session_id).await.unwrap();

        let records = repo.get_session(session_id).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_session_is_empty() {
        let repo = SessionRepository::new();
        let records = repo.get_session(Uuid::new_v4()).await.unwrap();
        assert!(records.is_empty());
    }
}

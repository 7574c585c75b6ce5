use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::errors::RepositoryError;
use crate::models::assessment::AssessmentRecord;

/// In-memory storage for session assessment records.
///
/// Records are keyed by session id, then by condition label, so a session
/// holds at most one record per condition and re-assessing replaces the
/// previous entry.
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    /// Assessment records per session
    sessions: Arc<Mutex<HashMap<Uuid, HashMap<String, AssessmentRecord>>>>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Store a record, replacing any existing record for the same condition
    pub async fn store_record(
        &self,
        record: &AssessmentRecord,
    ) -> Result<AssessmentRecord, RepositoryError> {
        let mut store = self
            .sessions
            .lock()
            .map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        store
            .entry(record.session_id)
            .or_default()
            .insert(record.condition.clone(), record.clone());
        Ok(record.clone())
    }

    /// Get all records for a session; unknown sessions yield an empty list
    pub async fn get_session(
        &self,
        session_id: Uuid,
    ) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let store = self
            .sessions
            .lock()
            .map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        let records = store
            .get(&session_id)
            .map(|session| session.values().cloned().collect())
            .unwrap_or_default();
        Ok(records)
    }

    /// Remove all records for a session
    pub async fn clear_session(&self, session_id: Uuid) -> Result<(), RepositoryError> {
        let mut store = self
            .sessions
            .lock()
            .map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        store.remove(&session_id);
        Ok(())
    }

    /// Number of sessions currently holding records
    pub async fn session_count(&self) -> Result<usize, RepositoryError> {
        let store = self
            .sessions
            .lock()
            .map_err(|e| RepositoryError::MutexLock(e.to_string()))?;
        Ok(store.len())
    }
}

//! In-Memory Diagnosis Session Repository
//!
//! Keeps sessions in a process-local map until they are deleted.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::DiagnosisSession;
use crate::ports::DiagnosisSessionRepository;

/// In-memory storage for diagnosis sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, DiagnosisSession>>>,
}

impl InMemorySessionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found(id: &SessionId) -> DomainError {
        DomainError::new(ErrorCode::SessionNotFound, format!("Session not found: {}", id))
            .with_detail("session_id", id.to_string())
    }
}

#[async_trait]
impl DiagnosisSessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &DiagnosisSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(session.id()) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Session already exists: {}", session.id()),
            ));
        }
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn update(
        &self,
        session: &DiagnosisSession,
        expected_version: u64,
    ) -> Result<(), DomainError> {
        // Compare and swap under one write lock.
        let mut sessions = self.sessions.write().await;
        let stored = sessions
            .get_mut(session.id())
            .ok_or_else(|| Self::not_found(session.id()))?;

        if stored.version() != expected_version {
            return Err(DomainError::new(
                ErrorCode::ConcurrentModification,
                format!(
                    "Session {} changed while this request was in flight",
                    session.id()
                ),
            )
            .with_detail("expected_version", expected_version.to_string())
            .with_detail("stored_version", stored.version().to_string()));
        }

        *stored = session.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<DiagnosisSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RespondentRole;
    use crate::domain::survey::{BusinessProfile, ResponseSet};

    fn session() -> DiagnosisSession {
        DiagnosisSession::new_dual(SessionId::new(), BusinessProfile::default())
    }

    #[tokio::test]
    async fn save_and_find_round_trip() {
        let repo = InMemorySessionRepository::new();
        let session = session();
        repo.save(&session).await.unwrap();

        let found = repo.find_by_id(session.id()).await.unwrap();
        assert_eq!(found, Some(session));
    }

    #[tokio::test]
    async fn save_rejects_duplicate_id() {
        let repo = InMemorySessionRepository::new();
        let session = session();
        repo.save(&session).await.unwrap();
        let err = repo.save(&session).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[tokio::test]
    async fn update_replaces_stored_copy() {
        let repo = InMemorySessionRepository::new();
        let mut session = session();
        repo.save(&session).await.unwrap();

        let read_at = session.version();
        session
            .submit(RespondentRole::Executive, ResponseSet::new().with("soft_1", 4))
            .unwrap();
        repo.update(&session, read_at).await.unwrap();

        let stored = repo.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), session.status());
        assert_eq!(stored.version(), 1);
    }

    #[tokio::test]
    async fn stale_copy_cannot_overwrite_newer_write() {
        let repo = InMemorySessionRepository::new();
        let session = session();
        repo.save(&session).await.unwrap();

        let mut first = repo.find_by_id(session.id()).await.unwrap().unwrap();
        let mut second = repo.find_by_id(session.id()).await.unwrap().unwrap();

        first
            .submit(RespondentRole::Executive, ResponseSet::new().with("soft_1", 5))
            .unwrap();
        second
            .submit(RespondentRole::Executive, ResponseSet::new().with("soft_1", 1))
            .unwrap();

        repo.update(&first, 0).await.unwrap();
        let err = repo.update(&second, 0).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConcurrentModification);

        let stored = repo.find_by_id(session.id()).await.unwrap().unwrap();
        assert_eq!(
            stored.responses(RespondentRole::Executive).unwrap().get("soft_1"),
            Some(5)
        );
    }

    #[tokio::test]
    async fn stored_copy_is_isolated_from_caller() {
        let repo = InMemorySessionRepository::new();
        let mut session = session();
        repo.save(&session).await.unwrap();

        session
            .submit(RespondentRole::Executive, ResponseSet::new())
            .unwrap();

        let stored = repo.find_by_id(session.id()).await.unwrap().unwrap();
        assert!(stored.responses(RespondentRole::Executive).is_none());
    }

    #[tokio::test]
    async fn update_unknown_session_is_not_found() {
        let repo = InMemorySessionRepository::new();
        let err = repo.update(&session(), 0).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn delete_removes_session() {
        let repo = InMemorySessionRepository::new();
        let session = session();
        repo.save(&session).await.unwrap();

        repo.delete(session.id()).await.unwrap();
        assert!(repo.find_by_id(session.id()).await.unwrap().is_none());

        let err = repo.delete(session.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }
}

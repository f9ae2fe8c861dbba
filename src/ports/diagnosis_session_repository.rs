//! Diagnosis session repository port.
//!
//! Defines the contract for persisting and retrieving DiagnosisSession
//! aggregates for the lifetime of a diagnosis.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::DiagnosisSession;
use async_trait::async_trait;

/// Repository port for DiagnosisSession persistence.
///
/// Implementations store aggregates by value: a session read from the
/// repository is an independent copy, and changes become visible only
/// through `update`.
#[async_trait]
pub trait DiagnosisSessionRepository: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, session: &DiagnosisSession) -> Result<(), DomainError>;

    /// Update an existing session.
    ///
    /// The write succeeds only while the stored copy is still at
    /// `expected_version`, the version the caller read before mutating.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    /// - `ConcurrentModification` if another writer got there first
    /// - `StorageError` on persistence failure
    async fn update(
        &self,
        session: &DiagnosisSession,
        expected_version: u64,
    ) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<DiagnosisSession>, DomainError>;

    /// Delete a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    async fn delete(&self, id: &SessionId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnosis_session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn DiagnosisSessionRepository) {}
    }
}

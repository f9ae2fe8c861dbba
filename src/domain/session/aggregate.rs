//! Diagnosis session aggregate.
//!
//! A session owns the answer sets of one diagnosis and enforces the
//! answering order of its mode. Scoring itself stays in the pure
//! `scoring` module; the session only decides when a report may be built.

use crate::domain::foundation::{
    DiagnosisCode, DiagnosisMode, DiagnosisStatus, DomainError, ErrorCode, RespondentRole,
    SessionId, StateMachine, Timestamp,
};
use crate::domain::report::{DiagnosisReport, DualReport, ReportHeader, SingleReport};
use crate::domain::survey::{BusinessProfile, QuestionCatalog, ResponseSet};
use serde::{Deserialize, Serialize};

/// Diagnosis session aggregate.
///
/// # Invariants
///
/// - `status.mode() == mode`
/// - Single mode only ever holds `single_responses`
/// - Dual mode holds `manager_responses` only after `executive_responses`
/// - `version` grows by one with every accepted mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisSession {
    id: SessionId,

    /// Human-readable code derived from `created_at`.
    code: DiagnosisCode,

    mode: DiagnosisMode,

    profile: BusinessProfile,

    status: DiagnosisStatus,

    single_responses: Option<ResponseSet>,
    executive_responses: Option<ResponseSet>,
    manager_responses: Option<ResponseSet>,

    /// Mutation counter used for optimistic concurrency in repositories.
    #[serde(default)]
    version: u64,

    created_at: Timestamp,
    updated_at: Timestamp,
}

impl DiagnosisSession {
    /// Create a session collecting one answer set.
    pub fn new_single(id: SessionId, profile: BusinessProfile) -> Self {
        Self::new(id, DiagnosisMode::Single, profile)
    }

    /// Create a session comparing executive and manager answers.
    pub fn new_dual(id: SessionId, profile: BusinessProfile) -> Self {
        Self::new(id, DiagnosisMode::Dual, profile)
    }

    /// Create a session for the given mode.
    pub fn new(id: SessionId, mode: DiagnosisMode, profile: BusinessProfile) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            code: DiagnosisCode::from_timestamp(&now),
            mode,
            profile,
            status: DiagnosisStatus::initial(mode),
            single_responses: None,
            executive_responses: None,
            manager_responses: None,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn code(&self) -> &DiagnosisCode {
        &self.code
    }

    pub fn mode(&self) -> DiagnosisMode {
        self.mode
    }

    pub fn profile(&self) -> &BusinessProfile {
        &self.profile
    }

    pub fn status(&self) -> DiagnosisStatus {
        self.status
    }

    /// Returns the answers submitted by a role, if any.
    pub fn responses(&self, role: RespondentRole) -> Option<&ResponseSet> {
        match role {
            RespondentRole::Single => self.single_responses.as_ref(),
            RespondentRole::Executive => self.executive_responses.as_ref(),
            RespondentRole::Manager => self.manager_responses.as_ref(),
        }
    }

    /// Number of mutations applied since creation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Roles whose answers the workflow currently accepts.
    pub fn expected_roles(&self) -> Vec<RespondentRole> {
        match self.status {
            DiagnosisStatus::AwaitingAnswers | DiagnosisStatus::Submitted => {
                vec![RespondentRole::Single]
            }
            DiagnosisStatus::AwaitingExecutive => vec![RespondentRole::Executive],
            DiagnosisStatus::AwaitingManager => vec![RespondentRole::Manager],
            DiagnosisStatus::Complete => Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Store a respondent's answers and advance the workflow.
    ///
    /// A single session accepts resubmission; the new answers replace the
    /// old ones.
    ///
    /// # Errors
    ///
    /// - `RoleMismatch` if the role does not belong to the session's mode
    /// - `InvalidStateTransition` if the role answers out of order or the
    ///   dual workflow is already complete
    pub fn submit(
        &mut self,
        role: RespondentRole,
        responses: ResponseSet,
    ) -> Result<DiagnosisStatus, DomainError> {
        if !self.mode.roles().contains(&role) {
            return Err(DomainError::new(
                ErrorCode::RoleMismatch,
                format!("Role '{}' cannot answer a {} diagnosis", role, self.mode),
            )
            .with_detail("role", role.to_string()));
        }

        let target = match role {
            RespondentRole::Single => DiagnosisStatus::Submitted,
            RespondentRole::Executive => DiagnosisStatus::AwaitingManager,
            RespondentRole::Manager => DiagnosisStatus::Complete,
        };
        let next = self.status.transition_to(target).map_err(|_| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "{} answers are not accepted while the diagnosis is '{}'",
                    role.label(),
                    self.status
                ),
            )
            .with_detail("role", role.to_string())
        })?;

        match role {
            RespondentRole::Single => self.single_responses = Some(responses),
            RespondentRole::Executive => self.executive_responses = Some(responses),
            RespondentRole::Manager => self.manager_responses = Some(responses),
        }
        self.status = next;
        self.touch();
        Ok(next)
    }

    /// Clear both answer sets of a dual session and start over.
    ///
    /// Resetting a session that is already awaiting the executive is a no-op.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` for single sessions, which are resubmitted
    ///   instead
    pub fn reset(&mut self) -> Result<DiagnosisStatus, DomainError> {
        if self.mode != DiagnosisMode::Dual {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Only dual diagnoses can be reset; resubmit the answers instead",
            ));
        }

        if self.status != DiagnosisStatus::AwaitingExecutive {
            self.status = self
                .status
                .transition_to(DiagnosisStatus::AwaitingExecutive)?;
        }
        self.executive_responses = None;
        self.manager_responses = None;
        self.touch();
        Ok(self.status)
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Timestamp::now();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reporting
    // ─────────────────────────────────────────────────────────────────────────

    /// Build the report for the submitted answers.
    ///
    /// # Errors
    ///
    /// - `WorkflowIncomplete` until every required answer set is in
    pub fn report(
        &self,
        catalog: &QuestionCatalog,
        threshold: f64,
    ) -> Result<DiagnosisReport, DomainError> {
        let header = ReportHeader::new(self.code.clone(), self.profile, &self.updated_at);
        match (
            &self.single_responses,
            &self.executive_responses,
            &self.manager_responses,
        ) {
            (Some(single), _, _) if self.status == DiagnosisStatus::Submitted => Ok(
                DiagnosisReport::Single(SingleReport::build(header, single, catalog, threshold)),
            ),
            (_, Some(executive), Some(manager)) if self.status == DiagnosisStatus::Complete => {
                Ok(DiagnosisReport::Dual(DualReport::build(
                    header, executive, manager, catalog, threshold,
                )))
            }
            _ => Err(DomainError::new(
                ErrorCode::WorkflowIncomplete,
                format!("Report is not available while the diagnosis is '{}'", self.status),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::Quadrant;
    use crate::domain::survey::BuiltinCatalog;

    fn single() -> DiagnosisSession {
        DiagnosisSession::new_single(SessionId::new(), BusinessProfile::default())
    }

    fn dual() -> DiagnosisSession {
        DiagnosisSession::new_dual(SessionId::new(), BusinessProfile::default())
    }

    fn answers(score: i32) -> ResponseSet {
        ResponseSet::new().with("soft_1", score).with("hard_1", score)
    }

    // Construction tests

    #[test]
    fn new_sessions_start_in_initial_status() {
        assert_eq!(single().status(), DiagnosisStatus::AwaitingAnswers);
        assert_eq!(dual().status(), DiagnosisStatus::AwaitingExecutive);
    }

    #[test]
    fn code_is_derived_from_creation_time() {
        let session = single();
        assert_eq!(session.code(), &DiagnosisCode::from_timestamp(session.created_at()));
        assert!(session.code().as_str().starts_with("DIAG-"));
    }

    #[test]
    fn accepted_mutations_bump_version_and_rejected_ones_do_not() {
        let mut session = dual();
        assert_eq!(session.version(), 0);

        session.submit(RespondentRole::Executive, answers(4)).unwrap();
        assert_eq!(session.version(), 1);

        assert!(session.submit(RespondentRole::Executive, answers(2)).is_err());
        assert_eq!(session.version(), 1);

        session.reset().unwrap();
        assert_eq!(session.version(), 2);
    }

    // Single workflow tests

    #[test]
    fn single_submit_moves_to_submitted() {
        let mut session = single();
        assert_eq!(
            session.submit(RespondentRole::Single, answers(4)).unwrap(),
            DiagnosisStatus::Submitted
        );
        assert_eq!(session.responses(RespondentRole::Single), Some(&answers(4)));
    }

    #[test]
    fn single_resubmission_replaces_answers() {
        let mut session = single();
        session.submit(RespondentRole::Single, answers(4)).unwrap();
        session.submit(RespondentRole::Single, answers(2)).unwrap();
        assert_eq!(session.responses(RespondentRole::Single), Some(&answers(2)));
        assert_eq!(session.status(), DiagnosisStatus::Submitted);
    }

    #[test]
    fn single_session_rejects_dual_roles() {
        let mut session = single();
        let err = session.submit(RespondentRole::Executive, answers(4)).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleMismatch);
        assert_eq!(session.status(), DiagnosisStatus::AwaitingAnswers);
    }

    #[test]
    fn single_session_cannot_be_reset() {
        let err = single().reset().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    // Dual workflow tests

    #[test]
    fn dual_workflow_runs_executive_then_manager() {
        let mut session = dual();
        assert_eq!(
            session.submit(RespondentRole::Executive, answers(5)).unwrap(),
            DiagnosisStatus::AwaitingManager
        );
        assert_eq!(session.expected_roles(), vec![RespondentRole::Manager]);
        assert_eq!(
            session.submit(RespondentRole::Manager, answers(2)).unwrap(),
            DiagnosisStatus::Complete
        );
        assert!(session.expected_roles().is_empty());
    }

    #[test]
    fn manager_before_executive_is_rejected() {
        let mut session = dual();
        let err = session.submit(RespondentRole::Manager, answers(3)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert!(session.responses(RespondentRole::Manager).is_none());
    }

    #[test]
    fn answers_after_completion_are_rejected() {
        let mut session = dual();
        session.submit(RespondentRole::Executive, answers(5)).unwrap();
        session.submit(RespondentRole::Manager, answers(2)).unwrap();
        for role in [RespondentRole::Executive, RespondentRole::Manager] {
            let err = session.submit(role, answers(1)).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        }
    }

    #[test]
    fn dual_session_rejects_single_role() {
        let err = dual().submit(RespondentRole::Single, answers(3)).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleMismatch);
    }

    #[test]
    fn reset_clears_both_answer_sets() {
        let mut session = dual();
        session.submit(RespondentRole::Executive, answers(5)).unwrap();
        session.submit(RespondentRole::Manager, answers(2)).unwrap();

        assert_eq!(session.reset().unwrap(), DiagnosisStatus::AwaitingExecutive);
        assert!(session.responses(RespondentRole::Executive).is_none());
        assert!(session.responses(RespondentRole::Manager).is_none());
        assert!(session.report(&BuiltinCatalog::Standard.load().unwrap(), 60.0).is_err());
    }

    #[test]
    fn reset_from_awaiting_manager_and_initial_state() {
        let mut session = dual();
        assert_eq!(session.reset().unwrap(), DiagnosisStatus::AwaitingExecutive);
        session.submit(RespondentRole::Executive, answers(5)).unwrap();
        assert_eq!(session.reset().unwrap(), DiagnosisStatus::AwaitingExecutive);
    }

    // Report tests

    #[test]
    fn report_requires_complete_workflow() {
        let catalog = BuiltinCatalog::Standard.load().unwrap();
        let mut session = dual();
        let err = session.report(&catalog, 60.0).unwrap_err();
        assert_eq!(err.code, ErrorCode::WorkflowIncomplete);

        session.submit(RespondentRole::Executive, answers(5)).unwrap();
        assert!(session.report(&catalog, 60.0).is_err());

        session.submit(RespondentRole::Manager, answers(1)).unwrap();
        match session.report(&catalog, 60.0).unwrap() {
            DiagnosisReport::Dual(report) => {
                assert_eq!(&report.header.diagnosis_code, session.code());
                assert!(report.perception_mismatch);
            }
            other => panic!("expected dual report, got {:?}", other.mode()),
        }
    }

    #[test]
    fn single_report_uses_submitted_answers() {
        let catalog = BuiltinCatalog::Standard.load().unwrap();
        let mut session = single();
        assert!(session.report(&catalog, 60.0).is_err());

        let all_fives: ResponseSet = catalog.iter().map(|(_, q)| (q.id().to_string(), 5)).collect();
        session.submit(RespondentRole::Single, all_fives).unwrap();
        match session.report(&catalog, 60.0).unwrap() {
            DiagnosisReport::Single(report) => assert_eq!(report.quadrant(), Quadrant::Healthy),
            other => panic!("expected single report, got {:?}", other.mode()),
        }
    }
}

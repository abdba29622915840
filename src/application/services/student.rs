//! Student management service — application-layer orchestration
//!
//! Translates repository outcomes into stable results for callers. The
//! single-record lookups shield callers from storage faults (both a fault
//! and genuine absence come back as `None`); delete surfaces both failure
//! modes as [`DomainError::ObjectNotFound`]; list and create let storage
//! faults through untouched. That per-operation split is the observed
//! contract of this service and must not be unified.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    CreateStudentDto, DomainError, DomainResult, Student, StudentRepositoryInterface,
};

/// Delete-path policy: a storage fault and a genuine absence map to the
/// same caller-visible outcome. Call sites never encode this conflation;
/// if it is ever revisited, this is the only place to change.
fn missing_student(uuid: &str) -> DomainError {
    DomainError::ObjectNotFound(uuid.to_string())
}

/// Student service — orchestrates the student record use-cases.
///
/// Generic over `R: StudentRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer. Holds no state beyond the repository
/// reference; every operation is a single request/response call.
pub struct StudentService<R: StudentRepositoryInterface> {
    repo: Arc<R>,
}

impl<R: StudentRepositoryInterface> StudentService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// List every student, in storage order. Storage faults propagate.
    pub async fn find_all_students(&self) -> DomainResult<Vec<Student>> {
        self.repo.find_all().await
    }

    /// Find a student by internal identifier.
    ///
    /// Returns `None` both when no record exists and when the lookup hit a
    /// storage fault; lookup callers never see a distinguishable error.
    pub async fn find_student_by_id(&self, id: i32) -> Option<Student> {
        let student = match self.repo.find_by_id(id).await {
            Ok(found) => found,
            Err(e) => {
                info!(id, error = %e, "internal error retrieving student");
                return None;
            }
        };

        let Some(student) = student else {
            debug!(id, "did not find student");
            return None;
        };

        Some(student)
    }

    /// Find a student by public UUID. Same contract as
    /// [`find_student_by_id`](Self::find_student_by_id).
    pub async fn find_student_by_uuid(&self, uuid: &str) -> Option<Student> {
        let student = match self.repo.find_by_uuid(uuid).await {
            Ok(found) => found,
            Err(e) => {
                info!(uuid, error = %e, "internal error retrieving student");
                return None;
            }
        };

        let Some(student) = student else {
            debug!(uuid, "did not find student");
            return None;
        };

        Some(student)
    }

    /// Find a student by email address. Same contract as
    /// [`find_student_by_id`](Self::find_student_by_id).
    pub async fn find_student_by_email_address(&self, email_address: &str) -> Option<Student> {
        let student = match self.repo.find_by_email_address(email_address).await {
            Ok(found) => found,
            Err(e) => {
                info!(email_address, error = %e, "internal error retrieving student");
                return None;
            }
        };

        let Some(student) = student else {
            debug!(email_address, "did not find student");
            return None;
        };

        Some(student)
    }

    // ── Mutations ───────────────────────────────────────────────

    /// Create a student and persist it immediately.
    ///
    /// The identifier and UUID are assigned by the repository. No
    /// duplicate-email or duplicate-name check happens at this layer;
    /// storage faults propagate.
    pub async fn create_student(&self, name: &str, email_address: &str) -> DomainResult<Student> {
        let dto = CreateStudentDto {
            name: name.to_string(),
            email_address: email_address.to_string(),
        };

        self.repo.save_and_flush(dto).await
    }

    /// Not implemented — always returns `None`.
    // TODO: update semantics (which fields change, re-persist policy) are an
    // open product question; settle them before wiring this into a caller.
    pub async fn update_student(
        &self,
        _student: &Student,
        _name: &str,
        _email_address: &str,
    ) -> Option<Student> {
        None
    }

    /// Delete the student with this UUID.
    ///
    /// Fails with [`DomainError::ObjectNotFound`] carrying the UUID whether
    /// the record is genuinely absent or the lookup hit a storage fault.
    pub async fn delete_student(&self, uuid: &str) -> DomainResult<()> {
        let student = match self.repo.find_by_uuid(uuid).await {
            Ok(found) => found,
            Err(e) => {
                info!(uuid, error = %e, "internal error retrieving student");
                return Err(missing_student(uuid));
            }
        };

        let Some(student) = student else {
            debug!(uuid, "did not find student");
            return Err(missing_student(uuid));
        };

        self.repo.delete(&student).await
    }
}

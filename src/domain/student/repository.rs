use async_trait::async_trait;

use super::{CreateStudentDto, Student};
use crate::domain::DomainResult;

/// Persistence collaborator for [`Student`] records.
///
/// `Err(DomainError::Storage)` is a data-access failure; `Ok(None)` is
/// genuine absence. The two stay distinct at this boundary — the service
/// layer decides per operation whether callers may tell them apart.
#[async_trait]
pub trait StudentRepositoryInterface: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Student>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Student>>;
    async fn find_by_uuid(&self, uuid: &str) -> DomainResult<Option<Student>>;
    async fn find_by_email_address(&self, email_address: &str) -> DomainResult<Option<Student>>;

    /// Persist a new student and synchronize the write, returning the
    /// stored record with its storage-assigned id and UUID.
    async fn save_and_flush(&self, dto: CreateStudentDto) -> DomainResult<Student>;

    async fn delete(&self, student: &Student) -> DomainResult<()>;
}

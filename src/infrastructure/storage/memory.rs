//! In-memory student repository
//!
//! DashMap-backed implementation for development and testing. Storage
//! faults can be injected with
//! [`fail_storage`](InMemoryStudentRepository::fail_storage) so tests can
//! exercise the service's error-translation paths.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::{
    CreateStudentDto, DomainError, DomainResult, Student, StudentRepositoryInterface,
};

pub struct InMemoryStudentRepository {
    students: DashMap<i32, Student>,
    id_counter: AtomicI32,
    failing: AtomicBool,
    delete_failing: AtomicBool,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self {
            students: DashMap::new(),
            id_counter: AtomicI32::new(1),
            failing: AtomicBool::new(false),
            delete_failing: AtomicBool::new(false),
        }
    }

    /// When set, every repository call reports a data-access failure.
    pub fn fail_storage(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// When set, only the delete call reports a data-access failure;
    /// lookups keep working.
    pub fn fail_delete(&self, failing: bool) {
        self.delete_failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> DomainResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("injected storage fault".to_string()));
        }
        Ok(())
    }
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepositoryInterface for InMemoryStudentRepository {
    async fn find_all(&self) -> DomainResult<Vec<Student>> {
        self.check_available()?;
        Ok(self.students.iter().map(|e| e.value().clone()).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Student>> {
        self.check_available()?;
        Ok(self.students.get(&id).map(|e| e.value().clone()))
    }

    async fn find_by_uuid(&self, uuid: &str) -> DomainResult<Option<Student>> {
        self.check_available()?;
        Ok(self
            .students
            .iter()
            .find(|e| e.value().uuid == uuid)
            .map(|e| e.value().clone()))
    }

    async fn find_by_email_address(&self, email_address: &str) -> DomainResult<Option<Student>> {
        self.check_available()?;
        Ok(self
            .students
            .iter()
            .find(|e| e.value().email_address == email_address)
            .map(|e| e.value().clone()))
    }

    async fn save_and_flush(&self, dto: CreateStudentDto) -> DomainResult<Student> {
        self.check_available()?;

        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        let student = Student {
            id,
            uuid: uuid::Uuid::new_v4().to_string(),
            name: dto.name,
            email_address: dto.email_address,
            created_at: Utc::now(),
        };

        self.students.insert(id, student.clone());
        Ok(student)
    }

    async fn delete(&self, student: &Student) -> DomainResult<()> {
        self.check_available()?;
        if self.delete_failing.load(Ordering::SeqCst) {
            return Err(DomainError::Storage("injected storage fault".to_string()));
        }
        self.students.remove(&student.id);
        Ok(())
    }
}

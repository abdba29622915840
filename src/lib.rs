//! # Student Service
//!
//! Record-management service for `Student` entities: lookup by internal
//! identifier, external UUID or email address, plus creation and deletion.
//! Sits between an HTTP/API layer (not part of this crate) and a SeaORM
//! persistence layer reached through a repository interface.
//!
//! ## Architecture
//!
//! - **domain**: Student entity, repository interface, error types
//! - **application**: the `StudentService` orchestration layer
//! - **infrastructure**: SeaORM persistence and the in-memory repository

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::StudentService;
pub use config::{default_config_path, init_tracing, AppConfig};

// Re-export domain types for easy access
pub use domain::{
    CreateStudentDto, DomainError, DomainResult, Student, StudentRepositoryInterface,
};

// Re-export persistence types
pub use infrastructure::{init_database, InMemoryStudentRepository, SeaOrmStudentRepository};

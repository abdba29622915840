pub mod error;
pub mod student;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use student::{CreateStudentDto, Student, StudentRepositoryInterface};

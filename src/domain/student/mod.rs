//! Student aggregate
//!
//! Contains the Student entity, create DTO, and repository interface.

pub mod model;
pub mod repository;

mod dto_create;

pub use dto_create::CreateStudentDto;
pub use model::Student;
pub use repository::StudentRepositoryInterface;

pub mod memory;

pub use memory::InMemoryStudentRepository;

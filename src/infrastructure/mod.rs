pub mod database;
pub mod storage;

pub use database::init_database;
pub use database::repositories::SeaOrmStudentRepository;
pub use storage::InMemoryStudentRepository;

pub mod repository;
pub mod service;

pub use repository::{SeaOrmStudentStore, StudentStore};
pub use service::{StudentService, StudentView};

pub mod loaders;
pub mod student;

pub use loaders::{load_directory, parse_directory};
pub use student::Student;

pub mod directory_loader;

pub use directory_loader::{load_directory, parse_directory};

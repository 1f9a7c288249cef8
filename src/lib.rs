pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod validate;
pub mod writer;

// Re-export commonly used items for tests
pub use catalog::build_collection;
pub use config::Settings;
pub use writer::write_collection;

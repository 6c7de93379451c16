//! CLI command implementations.

pub mod assess;
pub mod config;
pub mod tables;

// Re-export submodules for convenience
pub use assess::AssessArgs;
pub use config::ConfigArgs;

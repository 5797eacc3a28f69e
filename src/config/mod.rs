//! Configuration loading for readiness runs.
//!
//! - [`env_file`] - dotenv-style `KEY=value` file parsing
//! - [`environment`] - the merged [`Environment`] the checks read

pub mod env_file;
pub mod environment;

pub use environment::Environment;

//! labready - Environment readiness checks for AI workshop labs.
//!
//! labready inspects a machine ahead of a workshop and reports whether it
//! is ready: interpreter version, installed packages, configuration
//! variables, sample data files, and one live round trip to the configured
//! chat-completions endpoint. It diagnoses; it never repairs.
//!
//! # Modules
//!
//! - [`catalog`] - the requirement catalog (built-in defaults + YAML)
//! - [`checks`] - the five readiness checks
//! - [`cli`] - command-line interface and dispatch
//! - [`config`] - env-file parsing and the merged [`config::Environment`]
//! - [`error`] - error types and result aliases
//! - [`probe`] - interpreter version and import probing
//! - [`report`] - run aggregation and report rendering
//! - [`ui`] - console theme and status icons
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::time::Duration;
//!
//! use labready::catalog::Catalog;
//! use labready::report;
//!
//! let catalog = Catalog::default();
//! let summary = report::run_all(&catalog, Path::new("."), None, Duration::from_secs(30));
//! if summary.overall_passed {
//!     println!("ready for the workshop");
//! }
//! ```

pub mod catalog;
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod report;
pub mod ui;

pub use error::{LabreadyError, Result};

//! The readiness checks.
//!
//! Five independent checks, each reducing one aspect of the machine to a
//! [`CheckResult`]. Checks never raise past their own boundary and never
//! stop at the first problem: every item is evaluated so the report is
//! always the complete diagnostic picture.
//!
//! - [`runtime`] - interpreter version floor
//! - [`dependency`] - workshop package imports
//! - [`configuration`] - required and optional variables
//! - [`assets`] - sample file existence
//! - [`connectivity`] - one live chat-completion round trip

pub mod assets;
pub mod configuration;
pub mod connectivity;
pub mod dependency;
pub mod outcome;
pub mod runtime;

pub use outcome::{CheckResult, ItemOutcome};

//! Command-line interface for labready.
//!
//! - [`args`] - argument definitions using clap derive macros
//! - [`commands`] - command implementations and dispatch

pub mod args;
pub mod commands;

pub use args::{CatalogArgs, CheckArgs, Cli, Commands, CompletionsArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};

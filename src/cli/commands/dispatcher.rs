//! Command dispatching.
//!
//! - [`Command`] trait for implementing subcommands
//! - [`CommandResult`] for uniform exit-code reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::error::Result;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, returning the exit code to use.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// Exit-code convention: 0 when the environment is ready, 1 when any check
/// failed, 2 for errors outside the checks' scope (bad catalog, usage).
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use.
    pub exit_code: i32,
}

impl CommandResult {
    /// A fully successful run.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    /// A run that completed but found problems.
    pub fn not_ready() -> Self {
        Self { exit_code: 1 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Route the CLI invocation to its command and execute it.
    ///
    /// No subcommand means `check` with default arguments.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => super::check::CheckCommand::new(
                &self.project_root,
                args.clone(),
                cli.quiet,
                cli.verbose,
            )
            .execute(),
            Some(Commands::Catalog(args)) => {
                super::catalog::CatalogCommand::new(&self.project_root, args.clone()).execute()
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute()
            }
            None => super::check::CheckCommand::new(
                &self.project_root,
                CheckArgs::default(),
                cli.quiet,
                cli.verbose,
            )
            .execute(),
        }
    }
}

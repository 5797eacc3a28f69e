//! CLI argument definitions.
//!
//! All arguments are defined with clap's derive macros. The main entry
//! point is the [`Cli`] struct; running with no subcommand is equivalent
//! to `labready check`.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// labready - Environment readiness checks for AI workshop labs.
#[derive(Debug, Parser)]
#[command(name = "labready")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show extra report detail (notes on passing items)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print the final verdict
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the readiness checks (default if no command specified)
    Check(CheckArgs),

    /// Show the resolved requirement catalog
    Catalog(CatalogArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Path to the env file (overrides <project>/.env)
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Path to a catalog file (overrides <project>/labready.yml)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Connectivity probe timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Output the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            env_file: None,
            catalog: None,
            timeout: 30,
            json: false,
        }
    }
}

/// Arguments for the `catalog` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CatalogArgs {
    /// Path to a catalog file (overrides <project>/labready.yml)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output as JSON instead of YAML
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,

    /// Output as YAML (the default)
    #[arg(long)]
    pub yaml: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

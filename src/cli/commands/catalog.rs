//! The `catalog` command: print the resolved requirement catalog.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::catalog::Catalog;
use crate::cli::args::CatalogArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The catalog command implementation.
pub struct CatalogCommand {
    project_root: PathBuf,
    args: CatalogArgs,
}

impl CatalogCommand {
    /// Create a new catalog command.
    pub fn new(project_root: &Path, args: CatalogArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for CatalogCommand {
    fn execute(&self) -> Result<CommandResult> {
        let catalog = Catalog::resolve(&self.project_root, self.args.catalog.as_deref())?;

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        } else {
            let yaml =
                serde_yaml::to_string(&catalog).context("failed to serialize catalog as YAML")?;
            print!("{yaml}");
        }

        Ok(CommandResult::success())
    }
}

//! The `check` command: run the readiness pipeline and report.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::Catalog;
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::report::{self, Renderer};
use crate::ui::{should_use_colors, StatusKind, Theme};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
    quiet: bool,
    verbose: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs, quiet: bool, verbose: bool) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            quiet,
            verbose,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        let catalog = Catalog::resolve(&self.project_root, self.args.catalog.as_deref())?;
        let timeout = Duration::from_secs(self.args.timeout);

        tracing::debug!(
            "running checks against {} (timeout {:?})",
            self.project_root.display(),
            timeout
        );

        let summary = report::run_all(
            &catalog,
            &self.project_root,
            self.args.env_file.as_deref(),
            timeout,
        );

        let styled = should_use_colors();
        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else if self.quiet {
            let (kind, verdict) = if summary.overall_passed {
                (StatusKind::Pass, "Environment ready")
            } else {
                (StatusKind::Fail, "Environment not ready")
            };
            let line = if styled {
                kind.format(&Theme::new(), verdict)
            } else {
                kind.format_plain(verdict)
            };
            println!("{line}");
        } else {
            print!(
                "{}",
                Renderer::new(styled).with_verbose(self.verbose).render(&summary)
            );
        }

        if summary.overall_passed {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::not_ready())
        }
    }
}

//! Merged configuration environment.
//!
//! [`Environment`] is the single configuration view the checks read:
//! process-ambient variables merged with an optional `.env` file. It is
//! built once by the configuration check and handed to the connectivity
//! check explicitly, so the dependency between the two stays visible and
//! the whole thing is constructible from plain maps in tests.
//!
//! Merge rule: ambient process variables win over file values, matching
//! dotenv's non-overriding load. A key set to a blank string counts as
//! unset for readiness purposes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::env_file;

/// Configuration key/value state for one readiness run.
#[derive(Debug, Clone)]
pub struct Environment {
    vars: HashMap<String, String>,
    /// The env file that was merged in, if one was found.
    source: Option<PathBuf>,
}

impl Environment {
    /// Build the environment for a project.
    ///
    /// Looks for `override_path` if given, else `<project_root>/.env`. A
    /// missing or unreadable file is not an error; the environment then
    /// consists of ambient variables only and `source()` returns `None`.
    pub fn load(project_root: &Path, override_path: Option<&Path>) -> Self {
        let path = override_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| project_root.join(".env"));

        let mut vars = HashMap::new();
        let mut source = None;

        if path.is_file() {
            match env_file::load(&path) {
                Ok(entries) => {
                    vars.extend(entries);
                    source = Some(path);
                }
                Err(e) => {
                    tracing::warn!("ignoring unreadable env file {}: {e}", path.display());
                }
            }
        }

        // Ambient variables take precedence over file values.
        vars.extend(std::env::vars());

        Self { vars, source }
    }

    /// Build an environment from explicit variables (tests, primarily).
    pub fn from_vars(vars: HashMap<String, String>) -> Self {
        Self { vars, source: None }
    }

    /// Raw value for a key, if present at all.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Non-blank value for a key. Blank and unset are equivalent.
    pub fn get_non_blank(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Whether the key holds a non-blank value.
    pub fn is_configured(&self, key: &str) -> bool {
        self.get_non_blank(key).is_some()
    }

    /// The env file merged into this environment, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

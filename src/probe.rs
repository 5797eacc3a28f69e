//! Interpreter probing.
//!
//! The runtime and package checks both shell out to the workshop
//! interpreter: once for `--version`, and once per catalog package for an
//! isolated `import`. Probe failures are facts to report, not errors to
//! propagate, so the API surfaces them as `Option`/`Err(String)` values.

use std::process::{Command, Stdio};

use regex::Regex;

/// Runs version and import queries against a configured interpreter command.
#[derive(Debug, Clone)]
pub struct InterpreterProbe {
    command: String,
}

impl InterpreterProbe {
    /// Create a probe for the given interpreter command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The interpreter command this probe invokes.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Query the interpreter's version triple.
    ///
    /// Returns `None` when the interpreter cannot be spawned or its output
    /// carries no recognizable version. Older CPython prints the version to
    /// stderr, so both streams are scanned.
    pub fn version(&self) -> Option<(u32, u32, u32)> {
        let output = Command::new(&self.command)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .ok()?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push(' ');
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        let version = parse_version(&text);
        tracing::debug!("{} --version reported {:?}", self.command, version);
        version
    }

    /// Attempt to import one module in a fresh interpreter process.
    ///
    /// Each attempt is isolated: a failure carries a short diagnostic and
    /// never affects any other module's probe.
    pub fn import_module(&self, module: &str) -> Result<(), String> {
        let output = Command::new(&self.command)
            .arg("-c")
            .arg(format!("import {module}"))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .output();

        match output {
            Ok(out) if out.status.success() => Ok(()),
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                // The last line of a Python traceback names the actual error.
                let reason = stderr
                    .lines()
                    .rev()
                    .find(|l| !l.trim().is_empty())
                    .unwrap_or("import failed")
                    .trim()
                    .to_string();
                Err(reason)
            }
            Err(e) => Err(format!("failed to run {}: {e}", self.command)),
        }
    }
}

/// Extract the first `major.minor[.patch]` triple from version output.
pub fn parse_version(text: &str) -> Option<(u32, u32, u32)> {
    let re = Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").expect("valid version regex");
    let caps = re.captures(text)?;

    let major = caps[1].parse().ok()?;
    let minor = caps[2].parse().ok()?;
    let patch = caps
        .get(3)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);

    Some((major, minor, patch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cpython_version_line() {
        assert_eq!(parse_version("Python 3.11.4"), Some((3, 11, 4)));
    }

    #[test]
    fn parses_two_part_version() {
        assert_eq!(parse_version("Python 3.8"), Some((3, 8, 0)));
    }

    #[test]
    fn parses_version_with_surrounding_noise() {
        assert_eq!(
            parse_version("Python 3.12.1 (main, Jan  1 2024)"),
            Some((3, 12, 1))
        );
    }

    #[test]
    fn no_version_in_text_returns_none() {
        assert_eq!(parse_version("command not found"), None);
    }

    #[test]
    fn missing_interpreter_yields_no_version() {
        let probe = InterpreterProbe::new("labready-no-such-interpreter");
        assert_eq!(probe.version(), None);
    }

    #[test]
    fn missing_interpreter_import_reports_spawn_failure() {
        let probe = InterpreterProbe::new("labready-no-such-interpreter");
        let err = probe.import_module("os").unwrap_err();
        assert!(err.contains("labready-no-such-interpreter"));
    }

    #[cfg(unix)]
    mod unix {
        use super::super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::path::PathBuf;
        use tempfile::TempDir;

        fn fake_interpreter(temp: &TempDir, script: &str) -> PathBuf {
            let path = temp.path().join("fakepy");
            fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn reads_version_from_stderr() {
            let temp = TempDir::new().unwrap();
            // Python 2 style: version goes to stderr.
            let fake = fake_interpreter(&temp, r#"echo "Python 2.7.18" >&2"#);

            let probe = InterpreterProbe::new(fake.to_string_lossy());
            assert_eq!(probe.version(), Some((2, 7, 18)));
        }

        #[test]
        fn import_success_when_exit_zero() {
            let temp = TempDir::new().unwrap();
            let fake = fake_interpreter(&temp, "exit 0");

            let probe = InterpreterProbe::new(fake.to_string_lossy());
            assert!(probe.import_module("numpy").is_ok());
        }

        #[test]
        fn import_failure_captures_last_stderr_line() {
            let temp = TempDir::new().unwrap();
            let fake = fake_interpreter(
                &temp,
                r#"echo "Traceback (most recent call last):" >&2
echo "ModuleNotFoundError: No module named 'pandas'" >&2
exit 1"#,
            );

            let probe = InterpreterProbe::new(fake.to_string_lossy());
            let err = probe.import_module("pandas").unwrap_err();
            assert!(err.contains("No module named 'pandas'"));
        }
    }
}

//! .env file parsing.
//!
//! Parses the conventional `KEY=value` format used by dotenv-style files.
//! Entries are returned in file order so later report lines mirror the file.
//!
//! Supported forms:
//!
//! - `KEY=value`
//! - `export KEY=value` (shell-sourceable files)
//! - `KEY="quoted value"` / `KEY='quoted value'`
//! - `KEY=` (empty value, kept as empty string)
//! - `# comment` and blank lines (skipped)
//! - values containing `=` (`URL=https://host?a=1&b=2`)

use std::path::Path;

use anyhow::{Context, Result};

/// Parse env file content into ordered `(key, value)` pairs.
///
/// Lines without an `=` separator are skipped rather than rejected; a
/// malformed line in a user's `.env` should not stop a readiness run.
pub fn parse(content: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();

    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line).trim_start();
        let Some(eq) = line.find('=') else {
            continue;
        };

        let key = line[..eq].trim();
        if key.is_empty() {
            continue;
        }

        let value = strip_quotes(line[eq + 1..].trim());
        entries.push((key.to_string(), value.to_string()));
    }

    entries
}

/// Read and parse an env file from disk.
pub fn load(path: &Path) -> Result<Vec<(String, String)>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read env file {}", path.display()))?;
    Ok(parse(&content))
}

fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

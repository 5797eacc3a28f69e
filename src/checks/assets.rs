//! Sample file existence check.

use std::path::Path;

use crate::checks::outcome::{CheckResult, ItemOutcome};

pub const NAME: &str = "Sample files";

/// Test that every catalog sample path exists under the project root.
///
/// Existence only: no readability or content validation, no globbing.
/// Absolute catalog paths are used as-is.
pub fn run(project_root: &Path, sample_files: &[String]) -> CheckResult {
    let items = sample_files
        .iter()
        .map(|entry| {
            let path = Path::new(entry);
            let full = if path.is_absolute() {
                path.to_path_buf()
            } else {
                project_root.join(path)
            };

            if full.exists() {
                ItemOutcome::satisfied(entry.clone())
            } else {
                ItemOutcome::unsatisfied(entry.clone(), Some("not found".to_string()))
            }
        })
        .collect();

    CheckResult::from_items(NAME, items)
}

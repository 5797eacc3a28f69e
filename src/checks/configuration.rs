//! Configuration variable check.

use std::path::Path;

use crate::catalog::Catalog;
use crate::checks::outcome::{CheckResult, ItemOutcome};
use crate::config::Environment;

pub const NAME: &str = "Configuration";

/// Load the environment and evaluate the catalog's configuration keys.
///
/// Returns the [`Environment`] alongside the result so the connectivity
/// check reads the same merged state this check reported on.
pub fn run(
    catalog: &Catalog,
    project_root: &Path,
    env_file: Option<&Path>,
) -> (CheckResult, Environment) {
    let env = Environment::load(project_root, env_file);
    let result = evaluate(&env, catalog);
    (result, env)
}

/// Evaluate required and optional keys against an already-built environment.
///
/// Required keys gate the verdict; blank counts as unset. Optional group
/// keys are advisory lines only. A missing env file is a warning, since
/// ambient variables may still carry everything needed.
pub fn evaluate(env: &Environment, catalog: &Catalog) -> CheckResult {
    let mut items = Vec::new();

    for key in &catalog.required_vars {
        if env.is_configured(key) {
            items.push(ItemOutcome::satisfied(key.clone()));
        } else {
            items.push(ItemOutcome::unsatisfied(
                key.clone(),
                Some("not configured".to_string()),
            ));
        }
    }

    for group in &catalog.optional_groups {
        for key in &group.keys {
            let label = format!("{key} ({})", group.name);
            let item = if env.is_configured(key) {
                ItemOutcome::satisfied(label)
            } else {
                ItemOutcome::unsatisfied(label, Some("not configured".to_string()))
            };
            items.push(item.advisory());
        }
    }

    let result = CheckResult::from_items(NAME, items);
    if env.source().is_none() {
        result.with_warning(".env file not found, using system variables")
    } else {
        result
    }
}

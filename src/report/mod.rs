//! Run aggregation and reporting.
//!
//! The aggregator runs the five checks in a fixed order, threads the
//! configuration environment from the configuration check into the
//! connectivity check, and folds the verdicts into a [`RunSummary`]. No
//! check is skipped or retried; an early failure never suppresses the
//! checks after it.

pub mod render;

use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::checks::outcome::CheckResult;
use crate::checks::{assets, configuration, connectivity, dependency, runtime};
use crate::probe::InterpreterProbe;

pub use render::Renderer;

/// All check results for one invocation.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Results in execution order.
    pub results: Vec<CheckResult>,
    /// True iff every check passed.
    pub overall_passed: bool,
}

impl RunSummary {
    /// Fold results into a summary. The overall verdict is the plain AND
    /// of the individual verdicts; there is no partial credit.
    pub fn new(results: Vec<CheckResult>) -> Self {
        let overall_passed = results.iter().all(|r| r.passed);
        Self {
            results,
            overall_passed,
        }
    }
}

/// Execute the full readiness pipeline against a project.
pub fn run_all(
    catalog: &Catalog,
    project_root: &Path,
    env_file: Option<&Path>,
    timeout: Duration,
) -> RunSummary {
    let probe = InterpreterProbe::new(&catalog.runtime.command);

    let mut results = Vec::with_capacity(5);
    results.push(runtime::run(&probe, &catalog.runtime));
    results.push(dependency::run(&probe, &catalog.packages));

    let (config_result, env) = configuration::run(catalog, project_root, env_file);
    results.push(config_result);

    results.push(assets::run(project_root, &catalog.sample_files));
    results.push(connectivity::run(&env, timeout));

    RunSummary::new(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::outcome::ItemOutcome;
    use tempfile::TempDir;

    fn passing(name: &str) -> CheckResult {
        CheckResult::from_items(name, vec![ItemOutcome::satisfied("item")])
    }

    fn failing(name: &str) -> CheckResult {
        CheckResult::from_items(name, vec![ItemOutcome::unsatisfied("item", None)])
    }

    #[test]
    fn overall_passes_iff_all_pass() {
        let summary = RunSummary::new(vec![passing("a"), passing("b"), passing("c")]);
        assert!(summary.overall_passed);
    }

    #[test]
    fn any_single_failure_flips_overall() {
        for fail_at in 0..5 {
            let results: Vec<_> = (0..5)
                .map(|i| {
                    if i == fail_at {
                        failing("failed")
                    } else {
                        passing("ok")
                    }
                })
                .collect();
            let summary = RunSummary::new(results);
            assert!(!summary.overall_passed);
            assert_eq!(summary.results.len(), 5, "no check result is dropped");
        }
    }

    #[test]
    fn empty_summary_passes_vacuously() {
        assert!(RunSummary::new(vec![]).overall_passed);
    }

    #[test]
    fn pipeline_always_produces_all_five_results_in_order() {
        // Bogus interpreter and empty project: everything fails, but the
        // full diagnostic picture is still produced.
        let temp = TempDir::new().unwrap();
        let catalog = Catalog {
            runtime: crate::catalog::RuntimeSpec {
                command: "labready-no-such-interpreter".to_string(),
                ..Default::default()
            },
            ..Catalog::default()
        };

        let summary = run_all(&catalog, temp.path(), None, Duration::from_millis(200));

        let names: Vec<_> = summary.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                runtime::NAME,
                dependency::NAME,
                configuration::NAME,
                assets::NAME,
                connectivity::NAME,
            ]
        );
        assert!(!summary.overall_passed);
    }

    #[test]
    fn summary_serializes_to_json() {
        let summary = RunSummary::new(vec![passing("a"), failing("b")]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["overall_passed"], false);
        assert_eq!(json["results"].as_array().unwrap().len(), 2);
    }
}

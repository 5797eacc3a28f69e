//! Workshop package availability check.

use crate::catalog::PackageSpec;
use crate::checks::outcome::{CheckResult, ItemOutcome};
use crate::probe::InterpreterProbe;

pub const NAME: &str = "Workshop packages";

/// Probe every catalog package with an isolated import attempt.
///
/// Fail-soft per item: one package failing to import is recorded and the
/// remaining packages are still probed, so the report always lists the full
/// `(loaded, total)` picture.
pub fn run(probe: &InterpreterProbe, packages: &[PackageSpec]) -> CheckResult {
    let items = packages
        .iter()
        .map(|pkg| {
            let label = format!("{} ({})", pkg.module, pkg.label);
            match probe.import_module(&pkg.module) {
                Ok(()) => ItemOutcome::satisfied(label),
                Err(reason) => {
                    tracing::debug!("import {} failed: {reason}", pkg.module);
                    ItemOutcome::unsatisfied(label, Some(reason))
                }
            }
        })
        .collect();

    CheckResult::from_items(NAME, items)
}

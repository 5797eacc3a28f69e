//! Interpreter version check.

use crate::catalog::RuntimeSpec;
use crate::checks::outcome::{CheckResult, ItemOutcome};
use crate::probe::InterpreterProbe;

pub const NAME: &str = "Python runtime";

/// Verify the workshop interpreter meets the catalog's version floor.
///
/// An interpreter that cannot be found or whose version output is
/// unrecognizable is a failed verdict with a note, never an error.
pub fn run(probe: &InterpreterProbe, spec: &RuntimeSpec) -> CheckResult {
    let item = match probe.version() {
        Some((major, minor, patch)) => {
            let label = format!("Python {major}.{minor}.{patch}");
            if spec.meets_floor(major, minor) {
                ItemOutcome::satisfied(label)
            } else {
                ItemOutcome::unsatisfied(
                    label,
                    Some(format!(
                        "requires Python {}.{}+",
                        spec.min_major, spec.min_minor
                    )),
                )
            }
        }
        None => ItemOutcome::unsatisfied(
            probe.command(),
            Some("interpreter not found or version not recognized".to_string()),
        ),
    };

    CheckResult::from_items(NAME, vec![item])
}

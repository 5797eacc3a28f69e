//! Check outcome types.
//!
//! Every check reduces to a [`CheckResult`]: a name, a verdict, and the
//! per-item detail behind it. Results are immutable once returned and owned
//! by the run summary for the rest of the invocation.

use serde::Serialize;

/// One inspected item within a check.
#[derive(Debug, Clone, Serialize)]
pub struct ItemOutcome {
    /// What was inspected (a module, a key, a path).
    pub label: String,
    /// Whether this item was found in order.
    pub satisfied: bool,
    /// Advisory items are surfaced in the report but never gate the verdict
    /// (optional configuration groups).
    pub advisory: bool,
    /// Diagnostic detail, mostly for unsatisfied items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ItemOutcome {
    /// A satisfied item.
    pub fn satisfied(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            satisfied: true,
            advisory: false,
            note: None,
        }
    }

    /// An unsatisfied item with an optional diagnostic note.
    pub fn unsatisfied(label: impl Into<String>, note: Option<String>) -> Self {
        Self {
            label: label.into(),
            satisfied: false,
            advisory: false,
            note,
        }
    }

    /// Mark this item as advisory (reported, never blocking).
    pub fn advisory(mut self) -> Self {
        self.advisory = true;
        self
    }

    /// Attach a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// The structured verdict of one check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Check name as shown in the report.
    pub name: String,
    /// Aggregate verdict: all non-advisory items satisfied.
    pub passed: bool,
    /// Per-item detail in evaluation order.
    pub items: Vec<ItemOutcome>,
    /// Non-blocking remarks (e.g. ".env file not found").
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl CheckResult {
    /// Build a result from items; the verdict is the AND of every
    /// non-advisory item. A check with no blocking items passes.
    pub fn from_items(name: impl Into<String>, items: Vec<ItemOutcome>) -> Self {
        let passed = items.iter().filter(|i| !i.advisory).all(|i| i.satisfied);
        Self {
            name: name.into(),
            passed,
            items,
            warnings: Vec::new(),
        }
    }

    /// Attach a warning line.
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Number of satisfied blocking items.
    pub fn satisfied_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| !i.advisory && i.satisfied)
            .count()
    }

    /// Number of blocking items.
    pub fn total(&self) -> usize {
        self.items.iter().filter(|i| !i.advisory).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_items_satisfied_passes() {
        let result = CheckResult::from_items(
            "test",
            vec![ItemOutcome::satisfied("a"), ItemOutcome::satisfied("b")],
        );
        assert!(result.passed);
        assert_eq!(result.satisfied_count(), 2);
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn single_unsatisfied_item_fails_without_hiding_others() {
        let result = CheckResult::from_items(
            "test",
            vec![
                ItemOutcome::satisfied("a"),
                ItemOutcome::unsatisfied("b", Some("not installed".into())),
                ItemOutcome::satisfied("c"),
            ],
        );
        assert!(!result.passed);
        assert_eq!(result.satisfied_count(), 2);
        assert_eq!(result.total(), 3);
        assert!(result.items[0].satisfied);
        assert!(result.items[2].satisfied);
    }

    #[test]
    fn advisory_items_never_gate_the_verdict() {
        let result = CheckResult::from_items(
            "test",
            vec![
                ItemOutcome::satisfied("required"),
                ItemOutcome::unsatisfied("optional", None).advisory(),
            ],
        );
        assert!(result.passed);
        assert_eq!(result.total(), 1);
    }

    #[test]
    fn no_blocking_items_passes() {
        let result = CheckResult::from_items(
            "test",
            vec![ItemOutcome::unsatisfied("optional", None).advisory()],
        );
        assert!(result.passed);
    }

    #[test]
    fn warnings_accumulate() {
        let result = CheckResult::from_items("test", vec![])
            .with_warning("first")
            .with_warning("second");
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn serializes_without_empty_optional_fields() {
        let result = CheckResult::from_items("test", vec![ItemOutcome::satisfied("a")]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("note"));
        assert!(!json.contains("warnings"));
    }
}

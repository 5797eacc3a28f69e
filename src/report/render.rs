//! Text rendering of a run summary.
//!
//! Produces the full human report: one section per check, a final summary
//! block, and exactly one of two closing narratives (ready / not ready).

use std::fmt::Write;

use crate::checks::outcome::{CheckResult, ItemOutcome};
use crate::report::RunSummary;
use crate::ui::{StatusKind, Theme};

const RULE: &str = "============================================================";

/// Renders a [`RunSummary`] as report text.
#[derive(Debug)]
pub struct Renderer {
    theme: Theme,
    /// Bracketed ASCII markers instead of styled icons (non-TTY).
    plain: bool,
    /// Include notes on passing items, such as the probe reply.
    verbose: bool,
}

impl Renderer {
    /// Create a renderer. `styled` selects icons + colors over bracketed text.
    pub fn new(styled: bool) -> Self {
        Self {
            theme: if styled { Theme::new() } else { Theme::plain() },
            plain: !styled,
            verbose: false,
        }
    }

    /// Include notes on passing items in the report.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Render the complete report.
    pub fn render(&self, summary: &RunSummary) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", self.emphasize("Workshop Environment Check"));
        let _ = writeln!(out, "{RULE}");

        for result in &summary.results {
            self.render_check(&mut out, result);
        }

        let _ = writeln!(out, "\n{RULE}");
        let _ = writeln!(out, "{}", self.emphasize("FINAL SUMMARY"));
        let _ = writeln!(out, "{RULE}");
        for result in &summary.results {
            let kind = if result.passed {
                StatusKind::Pass
            } else {
                StatusKind::Fail
            };
            let _ = writeln!(out, "{}", self.status_line(kind, &result.name));
        }

        let _ = writeln!(out);
        if summary.overall_passed {
            self.render_ready(&mut out);
        } else {
            self.render_not_ready(&mut out);
        }

        out
    }

    fn render_check(&self, out: &mut String, result: &CheckResult) {
        let _ = writeln!(out, "\n{}", self.theme.highlight.apply_to(&result.name));

        for warning in &result.warnings {
            let _ = writeln!(out, "  {}", self.status_line(StatusKind::Warn, warning));
        }

        for item in &result.items {
            let _ = writeln!(out, "  {}", self.item_line(item));
        }

        // A progress count only reads well for multi-item checks.
        if result.total() > 1 {
            let count = format!("{}/{} available", result.satisfied_count(), result.total());
            let _ = writeln!(out, "  {}", self.theme.dim.apply_to(count));
        }
    }

    fn item_line(&self, item: &ItemOutcome) -> String {
        let kind = match (item.satisfied, item.advisory) {
            (true, _) => StatusKind::Pass,
            (false, true) => StatusKind::Warn,
            (false, false) => StatusKind::Fail,
        };

        let mut msg = item.label.clone();
        // Notes on passing items are detail most runs don't need.
        if let Some(note) = item.note.as_ref().filter(|_| !item.satisfied || self.verbose) {
            let note = self.theme.dim.apply_to(format!("({note})"));
            msg = format!("{msg} {note}");
        }

        self.status_line(kind, &msg)
    }

    fn render_ready(&self, out: &mut String) {
        let headline = "SUCCESS! The environment is configured correctly.";
        let _ = writeln!(out, "{}", self.theme.success.apply_to(headline));
        let _ = writeln!(out, "You can run all labs.");
        let _ = writeln!(out, "\nNext steps:");
        let _ = writeln!(out, "  1. Open Lab 1 to get started");
        let _ = writeln!(out, "  2. Execute the cells in order");
        let _ = writeln!(out, "  3. Proceed with the remaining labs");
    }

    fn render_not_ready(&self, out: &mut String) {
        let headline = "WARNING! Some issues were found.";
        let _ = writeln!(out, "{}", self.theme.warning.apply_to(headline));
        let _ = writeln!(out, "\nRecommended actions:");
        let _ = writeln!(out, "  1. Install dependencies: pip install -r requirements.txt");
        let _ = writeln!(out, "  2. Configure the .env file with your credentials");
        let _ = writeln!(out, "  3. Run labready again");
        let _ = writeln!(out, "  4. Consult SETUP.md for more details");
    }

    fn status_line(&self, kind: StatusKind, msg: &str) -> String {
        if self.plain {
            kind.format_plain(msg)
        } else {
            kind.format(&self.theme, msg)
        }
    }

    fn emphasize(&self, text: &str) -> String {
        self.theme.header.apply_to(text).to_string()
    }
}

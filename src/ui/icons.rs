//! Status vocabulary for report lines.

use super::theme::Theme;

/// Canonical status kinds used across report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Item satisfied.
    Pass,
    /// Blocking item unsatisfied.
    Fail,
    /// Advisory item unsatisfied, or a non-fatal remark.
    Warn,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Fail => "✗",
            Self::Warn => "⚠",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Pass => "[ok]",
            Self::Fail => "[FAIL]",
            Self::Warn => "[warn]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Pass => theme.success.apply_to(icon).to_string(),
            Self::Fail => theme.error.apply_to(icon).to_string(),
            Self::Warn => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &Theme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

//! Visual theme and styling.

use console::Style;

/// Styles used by the report renderer.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for passing items (green).
    pub success: Style,
    /// Style for failing items (red bold).
    pub error: Style,
    /// Style for warnings and advisory misses (orange).
    pub warning: Style,
    /// Style for secondary detail (dim).
    pub dim: Style,
    /// Style for the report banner lines (bold magenta).
    pub header: Style,
    /// Style for per-check section names (bold).
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            warning: Style::new().color256(208),
            dim: Style::new().dim(),
            header: Style::new().bold().magenta(),
            highlight: Style::new().bold(),
        }
    }

    /// A theme with no styling, for non-TTY output and tests.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            warning: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            highlight: Style::new(),
        }
    }
}

/// Whether styled output should be used.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

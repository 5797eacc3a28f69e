//! Terminal presentation.
//!
//! - [`theme`] - console styles and color detection
//! - [`icons`] - status icon vocabulary with non-TTY fallback

pub mod icons;
pub mod theme;

pub use icons::StatusKind;
pub use theme::{should_use_colors, Theme};

//! Error types for labready operations.
//!
//! Check failures are never errors: every per-item problem a check finds is
//! converted into reportable state and surfaces in the run summary. The
//! [`LabreadyError`] type covers the things that genuinely prevent a run
//! from happening at all, such as an unreadable catalog file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for labready operations.
#[derive(Debug, Error)]
pub enum LabreadyError {
    /// Catalog file was requested explicitly but does not exist.
    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Failed to parse a catalog file.
    #[error("Failed to parse catalog at {path}: {message}")]
    CatalogParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for labready operations.
pub type Result<T> = std::result::Result<T, LabreadyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_not_found_displays_path() {
        let err = LabreadyError::CatalogNotFound {
            path: PathBuf::from("/tmp/missing.yml"),
        };
        assert!(err.to_string().contains("/tmp/missing.yml"));
    }

    #[test]
    fn catalog_parse_error_displays_path_and_message() {
        let err = LabreadyError::CatalogParseError {
            path: PathBuf::from("/tmp/catalog.yml"),
            message: "bad indentation".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/catalog.yml"));
        assert!(msg.contains("bad indentation"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LabreadyError = io_err.into();
        assert!(matches!(err, LabreadyError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(LabreadyError::CatalogNotFound {
                path: PathBuf::from("x.yml"),
            })
        }
        assert!(returns_error().is_err());
    }
}

//! Application layer errors.
//!
//! These errors represent failures of the outside world the ports talk to,
//! not business logic. Business-rule violations are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating the generate steps.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A bundled template file could not be read.
    #[error("cannot read template {}: {reason}", path.display())]
    TemplateRead { path: PathBuf, reason: String },

    /// A filesystem create/write operation failed.
    #[error("filesystem error at {}: {reason}", path.display())]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateRead { path, .. } => vec![
                format!("Could not read template: {}", path.display()),
                "If PREMIX_TEMPLATES_DIR is set, make sure it points at a \
                 directory with the <preset>/package.json layout"
                    .into(),
                "Otherwise reinstall premix - a bundled template is missing".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateRead { .. } => ErrorCategory::NotFound,
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}

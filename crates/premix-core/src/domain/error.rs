// ============================================================================
// domain/error.rs - DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may hold them across step boundaries)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (bad caller input)
    // ========================================================================
    #[error("unknown preset '{name}'")]
    UnknownPreset { name: String },

    #[error("invalid assets directory name '{name}': {reason}")]
    InvalidTargetDir { name: String, reason: String },

    // ========================================================================
    // Template Content Errors (packaging corruption, not user input)
    // ========================================================================
    #[error("manifest template is not valid JSON: {reason}")]
    ManifestDecode { reason: String },

    #[error("manifest template has unexpected shape: {reason}")]
    ManifestShape { reason: String },

    #[error("manifest re-encoding failed: {reason}")]
    ManifestEncode { reason: String },

    #[error("token substitution failed: {reason}")]
    SubstitutionFailed { reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("parent-directory traversal not allowed: {path}")]
    PathTraversalNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownPreset { name } => vec![
                format!("'{}' is not a known preset", name),
                "Available presets:".into(),
                "  • vue        - Vue 2 single-file components".into(),
                "  • react      - React with JSX entry point".into(),
                "  • bootstrap  - Bootstrap 4 with jQuery".into(),
                "Example: premix generate vue".into(),
            ],
            Self::InvalidTargetDir { reason, .. } => vec![
                format!("Directory name rejected: {}", reason),
                "Use a single, non-empty path segment (no separators)".into(),
                "Examples: assets, frontend, resources".into(),
            ],
            Self::ManifestDecode { .. } | Self::ManifestShape { .. } | Self::ManifestEncode { .. } => vec![
                "A bundled manifest template could not be used".into(),
                "If PREMIX_TEMPLATES_DIR is set, check the files it points at".into(),
                "Otherwise the installation may be corrupted - reinstall premix".into(),
            ],
            Self::SubstitutionFailed { .. } => vec![
                "The build-config rewrite could not be performed".into(),
                "This is unexpected for ordinary directory names - please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownPreset { .. } | Self::InvalidTargetDir { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

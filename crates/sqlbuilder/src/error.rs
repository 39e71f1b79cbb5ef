//! Error types for sqlbuilder

use thiserror::Error;

/// Result type alias for builder operations
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Error types raised while building a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// Bulk template does not end with exactly one row marker
    #[error("query must contain and end with only one {marker} as a marker for bulk builder")]
    MalformedTemplate { marker: String },

    /// Bound row does not match the arity derived from the template
    #[error("number of placeholders and args is different: expected {expected}, got {got}")]
    ArityMismatch { expected: usize, got: usize },
}

impl BuilderError {
    /// Create a malformed template error for the given marker
    pub fn malformed_template(marker: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            marker: marker.into(),
        }
    }

    /// Check if this is a malformed template error
    pub fn is_malformed_template(&self) -> bool {
        matches!(self, Self::MalformedTemplate { .. })
    }

    /// Check if this is an arity mismatch error
    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self, Self::ArityMismatch { .. })
    }
}

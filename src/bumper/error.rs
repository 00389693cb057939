//! Version Bumper Error Types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BumpError {
    #[error("Manifest has no valid version entry: {reason}")]
    ManifestFormat { reason: String },

    #[error("Invalid target version '{input}': expected MAJOR.MINOR.PATCH")]
    InputFormat { input: String },

    #[error("Build code {build_code} cannot be incremented without overflow")]
    Overflow { build_code: String },

    #[error("Failed to access manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for version bump operations
pub type BumpResult<T> = Result<T, BumpError>;

impl crate::core::error_handling::ContextualError for BumpError {
    fn is_user_actionable(&self) -> bool {
        !matches!(self, BumpError::Io { .. })
    }

    fn user_message(&self) -> Option<String> {
        match self {
            BumpError::Io { .. } => None,
            other => Some(other.to_string()),
        }
    }
}

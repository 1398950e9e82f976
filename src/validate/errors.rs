/// Errors from argument validation.
use std::path::PathBuf;

use thiserror::Error;

use super::extension::FileRole;

/// Why a wallpaper or config path was rejected.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Nothing exists at the given path.
    #[error("{role} file not found: {}", path.display())]
    NotFound {
        /// Which input the path was given for.
        role: FileRole,
        /// The path as resolved for the existence check.
        path: PathBuf,
    },

    /// The path exists but its extension is not accepted for its role.
    #[error(
        "{role} file '{}' has an unsupported extension (expected one of: {})",
        path.display(),
        accepted.join(", ")
    )]
    InvalidFileExtension {
        /// Which input the path was given for.
        role: FileRole,
        /// The offending path.
        path: PathBuf,
        /// Extensions accepted for this role.
        accepted: &'static [&'static str],
    },
}

impl ValidationError {
    /// The path that failed validation.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path, .. } | Self::InvalidFileExtension { path, .. } => path,
        }
    }
}

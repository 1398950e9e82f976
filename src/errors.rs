/// Top-level application errors and their exit codes.
use thiserror::Error;

use crate::config::ConfigError;
use crate::validate::ValidationError;

/// Anything that ends a run early.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Return the CLI exit code for this error.
    ///
    /// Clap already owns exit code 2 for usage errors.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(ValidationError::NotFound { .. }) => 3,
            Self::Validation(ValidationError::InvalidFileExtension { .. }) => 4,
            Self::Config(_) => 5,
        }
    }

    /// Machine-readable error code (`snake_case`) for JSON output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::NotFound { .. }) => "file_not_found",
            Self::Validation(ValidationError::InvalidFileExtension { .. }) => {
                "invalid_file_extension"
            }
            Self::Config(_) => "config_error",
        }
    }
}

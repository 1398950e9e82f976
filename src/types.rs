/// Serializable output types.
///
/// These are what gets written to stdout/stderr, either as JSON or rendered
/// as a table. They are decoupled from `ParsedArguments` and `ConfigFile`.
use serde::{Deserialize, Serialize};

use crate::config::{ConfigFile, WallpaperTool};
use crate::errors::AppError;
use crate::validate::{ParsedArguments, SchemeMode, ValidationError};

/// Summary of a validated invocation.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize)]
pub struct InvocationOutput {
    /// Resolved wallpaper path.
    pub wallpaper: String,
    /// Resolved config path.
    pub config: String,
    pub lightmode: bool,
    pub amoled: bool,
    pub mode: SchemeMode,
    pub palette: String,
    pub dry_run: bool,
    /// Template variable prefix from the config (default `@`).
    pub prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallpaper_tool: Option<WallpaperTool>,
    pub set_wallpaper: bool,
    pub reload_apps: bool,
    /// Number of `run_after` commands configured.
    pub run_after: usize,
    /// Template names, sorted.
    pub templates: Vec<String>,
}

impl InvocationOutput {
    #[must_use]
    pub fn new(args: &ParsedArguments, file: &ConfigFile) -> Self {
        let config = &file.config;
        Self {
            wallpaper: args.wallpaper().display().to_string(),
            config: args.config().display().to_string(),
            lightmode: args.lightmode(),
            amoled: args.amoled(),
            mode: args.mode(),
            palette: args.palette().to_owned(),
            dry_run: args.dry_run(),
            prefix: config.prefix().to_owned(),
            wallpaper_tool: config.wallpaper_tool,
            set_wallpaper: config.set_wallpaper.unwrap_or(false),
            reload_apps: config.reload_apps.unwrap_or(false),
            run_after: config.run_after.as_ref().map_or(0, Vec::len),
            templates: file.templates.keys().cloned().collect(),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// The path that failed validation, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Accepted extensions (for invalid extension errors).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from an `AppError`.
    #[must_use]
    pub fn from_app_error(err: &AppError) -> Self {
        let (path, accepted) = match err {
            AppError::Validation(v) => {
                let accepted = match v {
                    ValidationError::InvalidFileExtension { accepted, .. } => {
                        Some(accepted.iter().map(ToString::to_string).collect())
                    }
                    ValidationError::NotFound { .. } => None,
                };
                (Some(v.path().display().to_string()), accepted)
            }
            AppError::Config(_) => (None, None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                path,
                accepted,
            },
        }
    }
}

/// Raw and validated argument sets, and the validation pass between them.
///
/// Validation order is fixed so that a run with several bad inputs always
/// reports the same one:
///
/// 1. Wallpaper exists.
/// 2. Wallpaper has an image extension.
/// 3. Config exists.
/// 4. Config has a config extension.
use std::env;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use super::{
    errors::ValidationError,
    extension::{FileRole, has_accepted_extension},
    path::expand_path_with,
};

/// Palette name used when `--palette` is not given.
pub const DEFAULT_PALETTE: &str = "default";

/// Color scheme variant requested with `--mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeMode {
    /// Balanced, low-chroma accents derived from the source color.
    #[default]
    TonalSpot,
    /// Palette that stays close to the image content.
    Content,
    /// Playful palette with shifted hues.
    Expressive,
    /// Palette that matches the source color as closely as possible.
    Fidelity,
    /// Grayscale palette.
    Monochrome,
    /// Near-grayscale palette with a hint of the source hue.
    Neutral,
    /// High-chroma palette.
    Vibrant,
    /// Neutral surfaces with colorful accents.
    Rainbow,
    /// Bold hue rotation across accents.
    FruitSalad,
}

/// Tokenized but unchecked command-line input.
#[derive(Debug, Clone)]
pub struct RawArguments {
    pub wallpaper: PathBuf,
    pub config: PathBuf,
    pub lightmode: bool,
    pub amoled: bool,
    pub mode: SchemeMode,
    pub palette: String,
    pub dry_run: bool,
}

impl Default for RawArguments {
    fn default() -> Self {
        Self {
            wallpaper: PathBuf::new(),
            config: PathBuf::new(),
            lightmode: false,
            amoled: false,
            mode: SchemeMode::default(),
            palette: DEFAULT_PALETTE.to_owned(),
            dry_run: false,
        }
    }
}

/// Arguments whose paths have passed validation.
///
/// Only [`validate`] builds this type, and it exposes no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArguments {
    wallpaper: PathBuf,
    config: PathBuf,
    lightmode: bool,
    amoled: bool,
    mode: SchemeMode,
    palette: String,
    dry_run: bool,
}

impl ParsedArguments {
    #[must_use]
    pub fn wallpaper(&self) -> &Path {
        &self.wallpaper
    }

    #[must_use]
    pub fn config(&self) -> &Path {
        &self.config
    }

    #[must_use]
    pub fn lightmode(&self) -> bool {
        self.lightmode
    }

    #[must_use]
    pub fn amoled(&self) -> bool {
        self.amoled
    }

    #[must_use]
    pub fn mode(&self) -> SchemeMode {
        self.mode
    }

    #[must_use]
    pub fn palette(&self) -> &str {
        &self.palette
    }

    #[must_use]
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Validate both input paths and carry every flag through unchanged.
///
/// # Errors
///
/// - `ValidationError::NotFound` — no file at the wallpaper or config path
/// - `ValidationError::InvalidFileExtension` — the file exists but has the
///   wrong extension for its role
pub fn validate(raw: &RawArguments) -> Result<ParsedArguments, ValidationError> {
    let wallpaper = check_file(&raw.wallpaper, FileRole::Wallpaper)?;
    let config = check_file(&raw.config, FileRole::Config)?;

    Ok(ParsedArguments {
        wallpaper,
        config,
        lightmode: raw.lightmode,
        amoled: raw.amoled,
        mode: raw.mode,
        palette: raw.palette.clone(),
        dry_run: raw.dry_run,
    })
}

/// Resolve one path and check that it names a file with an accepted extension.
///
/// A path that exists as written is returned unchanged. Otherwise a leading
/// `~` or environment variable is expanded and the expanded path is checked.
///
/// # Errors
///
/// Existence is checked before the extension, so a missing `photo.txt` is
/// reported as `NotFound`.
pub fn check_file(path: &Path, role: FileRole) -> Result<PathBuf, ValidationError> {
    check_file_with(path, role, &|var| env::var(var).ok())
}

fn check_file_with(
    path: &Path,
    role: FileRole,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<PathBuf, ValidationError> {
    let resolved = if path.is_file() {
        path.to_path_buf()
    } else {
        expand_path_with(path, lookup)
    };
    debug!(role = %role, path = %resolved.display(), "checking input file");

    if !resolved.is_file() {
        return Err(ValidationError::NotFound {
            role,
            path: resolved,
        });
    }

    let accepted = role.accepted_extensions();
    if !has_accepted_extension(&resolved, accepted) {
        return Err(ValidationError::InvalidFileExtension {
            role,
            path: resolved,
            accepted,
        });
    }

    Ok(resolved)
}

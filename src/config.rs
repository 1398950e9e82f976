/// Config file model and loader.
///
/// The file is TOML syntax regardless of its `.toml` / `.ini` extension:
///
/// ```toml
/// [config]
/// set_wallpaper = true
/// wallpaper_tool = "Swww"
/// prefix = "@"
///
/// [templates.kitty]
/// input_path = "~/.config/walltheme/templates/kitty.conf"
/// output_path = "~/.config/kitty/colors.conf"
/// ```
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const DEFAULT_PREFIX: &str = "@";

/// Errors raised while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file passed validation but could not be read.
    #[error("Could not read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the config layout.
    #[error(
        "Error reading config file {}: {source}\n  hint: check the [config] and [templates] tables against the configuration docs",
        path.display()
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Program used to set the wallpaper after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallpaperTool {
    Swaybg,
    Swww,
    Nitrogen,
    Feh,
}

/// Apps whose colors are reloaded after templates are exported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apps {
    pub kitty: Option<bool>,
    pub waybar: Option<bool>,
    pub gtk_theme: Option<bool>,
    pub dunst: Option<bool>,
}

/// The `[config]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub reload_apps: Option<bool>,
    pub reload_apps_list: Option<Apps>,
    pub set_wallpaper: Option<bool>,
    pub wallpaper_tool: Option<WallpaperTool>,
    pub swww_options: Option<Vec<String>>,
    pub feh_options: Option<Vec<String>>,
    /// Commands (argv lists) to run once everything else is done.
    pub run_after: Option<Vec<Vec<String>>>,
    pub prefix: Option<String>,
}

impl Config {
    /// Sigil that starts template variables, e.g. `@` in `@{primary}`.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }
}

/// A template to fill with generated colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// Whole config file. Missing tables default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub config: Config,
    #[serde(default)]
    pub templates: BTreeMap<String, Template>,
}

impl ConfigFile {
    /// Read and parse the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file can't be read and
    /// `ConfigError::Parse` if its contents don't deserialize.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            templates = file.templates.len(),
            "loaded config file"
        );
        Ok(file)
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

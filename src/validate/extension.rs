/// Accepted file extensions per input role.
use std::fmt;
use std::path::Path;

/// Image formats the color extractor can decode.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "webp", "tif", "tiff"];

/// Config syntaxes the loader reads (both go through the TOML parser).
pub const CONFIG_EXTENSIONS: &[&str] = &["ini", "toml"];

/// Which CLI input a path was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// The `--wallpaper` image.
    Wallpaper,
    /// The `--config` settings file.
    Config,
}

impl FileRole {
    /// Extensions accepted for this role, lowercase and without the dot.
    #[must_use]
    pub fn accepted_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Wallpaper => IMAGE_EXTENSIONS,
            Self::Config => CONFIG_EXTENSIONS,
        }
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wallpaper => f.write_str("Wallpaper"),
            Self::Config => f.write_str("Config"),
        }
    }
}

/// Whether `path` ends in one of `accepted`, ignoring ASCII case.
///
/// Paths without an extension (including dotfiles such as `.ini`) never match.
#[must_use]
pub fn has_accepted_extension(path: &Path, accepted: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| accepted.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

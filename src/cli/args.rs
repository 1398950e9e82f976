/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::validate::{DEFAULT_PALETTE, RawArguments, SchemeMode};

/// walltheme — generate a color theme from a wallpaper.
#[derive(Debug, Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(
    name = "walltheme",
    about = "Generate a color theme from a wallpaper image",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Wallpaper image to generate the color scheme from.
    #[arg(short, long, value_name = "PATH")]
    pub wallpaper: PathBuf,

    /// Config file (.ini or .toml).
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Use the light variant of the color scheme.
    #[arg(short, long)]
    pub lightmode: bool,

    /// Use pure black backgrounds for the dark variant.
    #[arg(short, long)]
    pub amoled: bool,

    /// Which scheme variant to generate.
    #[arg(value_enum, short, long, value_name = "MODE", default_value_t)]
    pub mode: SchemeMode,

    /// Color palette to generate the scheme from.
    #[arg(short, long, value_name = "PALETTE", default_value = DEFAULT_PALETTE)]
    pub palette: String,

    /// Report what would be done without exporting templates, setting the
    /// wallpaper or running commands.
    #[arg(long)]
    pub dry_run: bool,

    /// Log debug details to stderr.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers.
    #[arg(long)]
    pub no_header: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Aligned key/value table (human-readable).
    Table,
}

impl From<&Cli> for RawArguments {
    fn from(cli: &Cli) -> Self {
        Self {
            wallpaper: cli.wallpaper.clone(),
            config: cli.config.clone(),
            lightmode: cli.lightmode,
            amoled: cli.amoled,
            mode: cli.mode,
            palette: cli.palette.clone(),
            dry_run: cli.dry_run,
        }
    }
}

/// Output formatting: JSON and table modes. TTY detection.
use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ErrorOutput, InvocationOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
        }
    }
}

/// Write the invocation summary to stdout.
pub fn write_invocation(summary: &InvocationOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(summary),
        OutputFormat::Compact => print_compact_json(summary),
        OutputFormat::Table | OutputFormat::Auto => println!("{}", invocation_table(summary, ctx)),
    }
}

fn invocation_table(summary: &InvocationOutput, ctx: &OutputCtx) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["KEY", "VALUE"]);
    }

    let mode = summary
        .mode
        .to_possible_value()
        .map_or_else(String::new, |v| v.get_name().to_owned());
    let tool = summary
        .wallpaper_tool
        .map_or_else(String::new, |t| format!("{t:?}").to_lowercase());

    let rows: [(&str, String); 13] = [
        ("wallpaper", summary.wallpaper.clone()),
        ("config", summary.config.clone()),
        ("lightmode", yes_no(summary.lightmode)),
        ("amoled", yes_no(summary.amoled)),
        ("mode", mode),
        ("palette", summary.palette.clone()),
        ("dry run", yes_no(summary.dry_run)),
        ("prefix", summary.prefix.clone()),
        ("set wallpaper", yes_no(summary.set_wallpaper)),
        ("wallpaper tool", tool),
        ("reload apps", yes_no(summary.reload_apps)),
        ("run after", summary.run_after.to_string()),
        ("templates", summary.templates.join(", ")),
    ];
    for (key, value) in rows {
        table.add_row([key.to_owned(), value]);
    }
    table
}

fn yes_no(flag: bool) -> String {
    let text = if flag { "yes" } else { "no" };
    text.to_owned()
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let _ = writeln!(out, "Error: {}", err.error.message);
            if let Some(accepted) = &err.error.accepted {
                let _ = writeln!(out, "  Accepted extensions: {}", accepted.join(", "));
            }
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

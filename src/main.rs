#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! walltheme — validate wallpaper and config inputs for color theme generation.

mod app;
mod cli;
mod config;
mod errors;
mod types;
mod validate;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header);

    if let Err(err) = app::run(&cli, &ctx) {
        let error_output = ErrorOutput::from_app_error(&err);
        write_error(&error_output, cli.output, cli.json);
        std::process::exit(err.exit_code());
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose` / `--quiet`.
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run loop: validate inputs, load the config, report the invocation.
use tracing::info;

use crate::cli::output::write_invocation;
use crate::cli::{Cli, OutputCtx};
use crate::config::ConfigFile;
use crate::errors::AppError;
use crate::types::InvocationOutput;
use crate::validate::{RawArguments, validate};

/// Run `walltheme`.
///
/// # Errors
///
/// Returns `AppError::Validation` for a missing or wrongly typed input file
/// and `AppError::Config` if the config file can't be loaded.
pub fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), AppError> {
    let args = validate(&RawArguments::from(cli))?;
    let config = ConfigFile::read(args.config())?;

    info!(
        wallpaper = %args.wallpaper().display(),
        templates = config.templates.len(),
        "loaded config"
    );
    if args.dry_run() {
        info!("dry run: templates, wallpaper and commands are left untouched");
    }

    write_invocation(&InvocationOutput::new(&args, &config), ctx);
    Ok(())
}

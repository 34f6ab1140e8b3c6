//! Command-line interface and dispatch.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};

use crate::error::Result;
use crate::shell::Executor;
use crate::ui::Theme;

/// Dispatch a parsed CLI invocation, returning the process exit code.
///
/// This is the application boundary that owns the one [`Executor`] instance:
/// global flags are forwarded into plain setters here and nowhere else.
pub fn dispatch(cli: &Cli) -> Result<i32> {
    let mut sh = match &cli.directory {
        Some(dir) => Executor::in_dir(dir)?,
        None => Executor::new(),
    };
    sh.set_emulate(cli.dry_run);
    sh.set_verbosity(cli.verbose);
    if cli.no_color {
        sh.set_theme(Theme::plain());
    }

    match &cli.command {
        Commands::Exec(args) => commands::exec::run(&mut sh, args),
        Commands::Install(args) => commands::install::run(&mut sh, args),
        Commands::Download(args) => commands::download::run(&mut sh, args),
        Commands::Archive(args) => commands::archive::run(&mut sh, args),
        Commands::Extract(args) => commands::extract::run(&mut sh, args),
        Commands::Service(args) => commands::service::run(&mut sh, args),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

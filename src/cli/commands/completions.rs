//! The `completions` command.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use clap::CommandFactory;

/// Generate shell completions on stdout.
pub fn run(args: &CompletionsArgs) -> Result<i32> {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "bosun", &mut std::io::stdout());
    Ok(0)
}

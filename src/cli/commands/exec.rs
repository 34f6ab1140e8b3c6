//! The `exec` command.

use crate::cli::args::ExecArgs;
use crate::error::Result;
use crate::shell::{ExecOptions, Executor};

/// Run one command through the executor and report its result.
pub fn run(sh: &mut Executor, args: &ExecArgs) -> Result<i32> {
    let command = args.command.join(" ");
    let options = ExecOptions {
        cwd: args.cwd.clone(),
        capture: args.capture,
        check: args.check,
        ..Default::default()
    };

    let result = sh.execute(&command, &options)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).map_err(anyhow::Error::from)?
        );
    } else if let Some(stdout) = &result.stdout {
        if !stdout.is_empty() {
            println!("{}", stdout);
        }
    }

    Ok(result.exit_code.unwrap_or(1))
}

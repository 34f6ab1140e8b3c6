//! The `extract` command.

use crate::cli::args::ExtractArgs;
use crate::error::Result;
use crate::ops::Archives;
use crate::shell::Executor;

/// Extract an archive, detecting the format from its extension.
pub fn run(sh: &mut Executor, args: &ExtractArgs) -> Result<i32> {
    let ok = Archives::new(sh).extract(&args.archive, args.destination.as_deref());
    if ok {
        sh.success(&format!("Extracted {}", args.archive.display()));
        Ok(0)
    } else {
        Ok(1)
    }
}

//! The `install` command.

use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::ops::System;
use crate::shell::Executor;

/// Install packages with the detected package manager.
pub fn run(sh: &mut Executor, args: &InstallArgs) -> Result<i32> {
    let packages: Vec<&str> = args.packages.iter().map(String::as_str).collect();

    let ok = System::new(sh).install(&packages, !args.no_check);
    if ok {
        sh.success(&format!("Installed {}", args.packages.join(", ")));
        Ok(0)
    } else {
        Ok(1)
    }
}
